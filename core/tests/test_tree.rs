
#[cfg(test)]
mod tests {
    use huff_core::{
        cipher::CipherTable,
        constants::{HEADER_LEN, SYMBOL_COUNT},
        frequency::FrequencyTable,
        headers::{encode_header, PairingOrder},
        tree::{Branch, HuffmanTree, NodeKind},
        types::HuffError,
    };

    #[test]
    fn all_zero_weights_chain_into_slot_zero() {
        let (tree, order) = HuffmanTree::from_frequencies(&FrequencyTable::new());
        for (step, pair) in order.pairs().enumerate() {
            assert_eq!(pair, (0, step as u8 + 1));
        }
        assert_eq!(tree.len(), 2 * SYMBOL_COUNT - 1);
        assert_eq!(tree.leaf_count(), SYMBOL_COUNT);
        assert_eq!(tree.height(), 255);
        assert_eq!(CipherTable::from_tree(&tree).zero_run(), 255);
    }

    #[test]
    fn lower_id_wins_ties() {
        // A=2, B=1, C=1: B is picked before C, then the zero chain absorbs C.
        let (_, order) = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"AABC"));
        let bytes = encode_header(&order);
        assert_eq!(&bytes[HEADER_LEN - 6..], &[0, b'B', 0, b'C', 0, b'A']);
    }

    #[test]
    fn root_weight_is_total_and_children_follow_ids() {
        let freqs = FrequencyTable::from_bytes(b"AABC");
        let (tree, _) = HuffmanTree::from_frequencies(&freqs);
        assert_eq!(tree.total_weight(), 4);

        let root = tree.node(tree.root());
        assert_eq!(root.symbol, 0);
        let NodeKind::Internal { left, right } = root.kind else { panic!("root must be internal") };
        assert_eq!(tree.node(left).symbol, 0);
        assert_eq!(tree.node(right).symbol, b'A');
        assert!(tree.is_leaf(right));
        assert_eq!(tree.child(tree.root(), Branch::Right), Some(right));
        assert_eq!(tree.child(right, Branch::Left), None);
    }

    #[test]
    fn build_is_deterministic() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i * i % 97) as u8).collect();
        let freqs = FrequencyTable::from_bytes(&data);
        let (t1, o1) = HuffmanTree::from_frequencies(&freqs);
        let (t2, o2) = HuffmanTree::from_frequencies(&freqs);
        assert_eq!(o1, o2);
        assert_eq!(t1, t2);
    }

    #[test]
    fn replay_rebuilds_the_same_shape() {
        let freqs = FrequencyTable::from_bytes(b"the quick brown fox jumps over the lazy dog");
        let (built, order) = HuffmanTree::from_frequencies(&freqs);
        let replayed = HuffmanTree::from_pairing_order(&order).unwrap();

        assert_eq!(replayed.len(), built.len());
        assert_eq!(replayed.height(), built.height());
        assert_eq!(replayed.total_weight(), 0);
        let mut stack = vec![(built.root(), replayed.root())];
        while let Some((a, b)) = stack.pop() {
            assert_eq!(built.node(a).symbol, replayed.node(b).symbol);
            match (built.node(a).kind, replayed.node(b).kind) {
                (NodeKind::Leaf, NodeKind::Leaf) => {}
                (NodeKind::Internal { left: la, right: ra }, NodeKind::Internal { left: lb, right: rb }) => {
                    stack.push((la, lb));
                    stack.push((ra, rb));
                }
                _ => panic!("shape mismatch"),
            }
        }
    }

    #[test]
    fn replay_accepts_unordered_pairs() {
        let swapped = PairingOrder::from_bytes({
            let mut b = [0u8; HEADER_LEN];
            for k in 0..255usize {
                b[2 * k] = k as u8 + 1;
                b[2 * k + 1] = 0;
            }
            b
        });
        let replayed = HuffmanTree::from_pairing_order(&swapped).unwrap();
        let (built, _) = HuffmanTree::from_frequencies(&FrequencyTable::new());
        assert_eq!(replayed.height(), built.height());
    }

    #[test]
    fn self_pair_is_corrupt() {
        let err = HuffmanTree::from_pairing_order(&PairingOrder::from_bytes([0u8; HEADER_LEN])).unwrap_err();
        assert!(matches!(err, HuffError::CorruptHeader { step: 0, symbol: 0, .. }));
        assert!(err.to_string().contains("paired with itself"));
    }

    #[test]
    fn reused_slot_is_corrupt() {
        let (_, chain) = HuffmanTree::from_frequencies(&FrequencyTable::new());
        let mut bytes = encode_header(&chain);
        // step 3 names slot 1, emptied at step 0
        bytes[6] = 1;
        bytes[7] = 4;
        let err = HuffmanTree::from_pairing_order(&PairingOrder::from_bytes(bytes)).unwrap_err();
        match err {
            HuffError::CorruptHeader { path, step, symbol, reason } => {
                assert!(path.is_none());
                assert_eq!(step, 3);
                assert_eq!(symbol, 1);
                assert_eq!(reason, "was already merged");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn branch_maps_bits() {
        assert_eq!(Branch::from_bit(false), Branch::Left);
        assert_eq!(Branch::from_bit(true), Branch::Right);
        assert_eq!(Branch::try_from(1u8).unwrap(), Branch::Right);
        assert!(Branch::try_from(2u8).is_err());
        assert_eq!(Branch::Right.to_string(), "1");
    }
}
