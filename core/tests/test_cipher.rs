
#[cfg(test)]
mod tests {
    use huff_core::{cipher::CipherTable, frequency::FrequencyTable, tree::HuffmanTree};

    fn table_for(data: &[u8]) -> CipherTable {
        let (tree, _) = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        CipherTable::from_tree(&tree)
    }

    #[test]
    fn aabc_codes() {
        let table = table_for(b"AABC");
        assert_eq!(table.code(b'A').to_string(), "1");
        assert_eq!(table.code(b'C').to_string(), "01");
        assert_eq!(table.code(b'B').to_string(), "001");
        assert!(table.code(b'A').len() <= table.code(b'B').len());
        assert!(table.code(b'A').len() <= table.code(b'C').len());
        assert_eq!(table.encoded_bits(&FrequencyTable::from_bytes(b"AABC")), 7);
    }

    #[test]
    fn every_symbol_has_a_code() {
        let table = table_for(b"only a few symbols");
        assert_eq!(table.iter().count(), 256);
        assert!(table.iter().all(|(_, c)| !c.is_empty()));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn zero_chain_lengths() {
        let table = table_for(&[]);
        assert_eq!(table.code(255).to_string(), "1");
        assert_eq!(table.code(0).len(), 255);
        assert_eq!(table.code(1).len(), 255);
        assert_eq!(table.zero_run(), 255);
        assert_eq!(table.max_len(), 255);
        assert_eq!(table.min_len(), 1);
        // deepest keeps the lowest symbol on ties
        assert_eq!(table.deepest(), table.code(0));
    }

    #[test]
    fn frequent_zero_byte_gets_short_zero_run() {
        let table = table_for(&[0u8]);
        assert_eq!(table.code(0).to_string(), "0");
        assert_eq!(table.zero_run(), 1);
        assert_eq!(table.deepest(), table.code(1));
        assert!(table.deepest().to_string().starts_with("10"));
    }

    #[test]
    fn replay_yields_identical_table() {
        let freqs = FrequencyTable::from_bytes(b"abracadabra, abracadabra!");
        let (built, order) = HuffmanTree::from_frequencies(&freqs);
        let replayed = HuffmanTree::from_pairing_order(&order).unwrap();
        assert_eq!(CipherTable::from_tree(&built), CipherTable::from_tree(&replayed));
    }
}
