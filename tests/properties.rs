use huffman::{
    decode_compressed, decode_plain_text, encode_bytes, header, CodeTable, FrequencyTable,
    HuffmanError, HuffmanNode, HuffmanTree, OrderedList,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum ListOp {
    Add(u64, u8),
    Remove(u64, u8),
    Pop(isize),
}

fn list_ops() -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..8u64, 0..8u8).prop_map(|(f, s)| ListOp::Add(f, s)),
            1 => (0..8u64, 0..8u8).prop_map(|(f, s)| ListOp::Remove(f, s)),
            1 => (-2..12isize).prop_map(ListOp::Pop),
        ],
        0..64,
    )
}

fn nonempty_table() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::vec((any::<u8>(), 1..10_000u64), 1..40).prop_map(|pairs| {
        let mut table = FrequencyTable::new();
        for (symbol, count) in pairs {
            table.set(symbol, count);
        }
        table
    })
}

fn codes(table: &FrequencyTable) -> CodeTable {
    CodeTable::from_tree(&HuffmanTree::from_frequencies(table).unwrap().unwrap())
}

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let encoding = encode_bytes(&data).unwrap();

        let mut packed = Vec::new();
        encoding.write_compressed(&mut packed).unwrap();
        prop_assert_eq!(&decode_compressed(packed.as_slice()).unwrap().bytes, &data);
        prop_assert_eq!(&decode_plain_text(&encoding.plain_text()).unwrap().bytes, &data);
    }

    #[test]
    fn single_byte_runs_round_trip(byte in any::<u8>(), len in 1..500usize) {
        let data = vec![byte; len];
        let encoding = encode_bytes(&data).unwrap();
        prop_assert_eq!(encoding.bits(), "");
        let mut packed = Vec::new();
        encoding.write_compressed(&mut packed).unwrap();
        prop_assert_eq!(decode_compressed(packed.as_slice()).unwrap().bytes, data);
    }

    #[test]
    fn header_fidelity(table in nonempty_table()) {
        prop_assert_eq!(header::decode(&header::encode(&table)).unwrap(), table);
    }

    #[test]
    fn codes_are_prefix_free(table in nonempty_table()) {
        let codes = codes(&table);
        prop_assert_eq!(codes.len(), table.distinct());
        for (a_symbol, a) in codes.iter() {
            for (b_symbol, b) in codes.iter() {
                if a_symbol != b_symbol {
                    prop_assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn tree_building_is_deterministic(table in nonempty_table()) {
        prop_assert_eq!(codes(&table), codes(&table.clone()));
    }

    #[test]
    fn ordered_list_stays_sorted_and_unique(ops in list_ops()) {
        let mut list = OrderedList::new();
        for op in ops {
            match op {
                ListOp::Add(freq, symbol) => {
                    let node = HuffmanNode::leaf(symbol, freq);
                    let present = list.search(&node);
                    prop_assert_eq!(list.add(node), !present);
                }
                ListOp::Remove(freq, symbol) => {
                    let node = HuffmanNode::leaf(symbol, freq);
                    let present = list.search(&node);
                    prop_assert_eq!(list.remove(&node), present);
                    prop_assert!(!list.search(&node));
                }
                ListOp::Pop(position) => {
                    let before = list.to_vec();
                    match list.pop(position) {
                        Ok(node) => prop_assert_eq!(&node, &before[position as usize]),
                        Err(HuffmanError::OutOfRange { size, .. }) => {
                            prop_assert!(position < 0 || position as usize >= before.len());
                            prop_assert_eq!(size, before.len());
                            prop_assert_eq!(list.to_vec(), before);
                        }
                        Err(e) => prop_assert!(false, "unexpected error: {}", e),
                    }
                }
            }

            let items = list.to_vec();
            prop_assert_eq!(items.len(), list.size());
            prop_assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
            let mut reversed = list.to_reversed_vec();
            reversed.reverse();
            prop_assert_eq!(reversed, items);
        }
    }
}
