
#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use huff_core::{
        cipher::CipherTable,
        codec::{decode_stream, encode_stream, pack_bytes, unpack_bytes, BitPacker, BitUnpacker, Padding, SymbolDecoder, SymbolEncoder},
        frequency::FrequencyTable,
        tree::HuffmanTree,
        types::HuffError,
    };

    fn setup(data: &[u8]) -> (HuffmanTree, CipherTable) {
        let (tree, _) = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        let table = CipherTable::from_tree(&tree);
        (tree, table)
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn packs_msb_first_with_zero_pad() {
        let (tree, table) = setup(b"AABC");
        // 1 1 001 01 + one pad bit
        let body = pack_bytes(&table, b"AABC", Padding::Guarded);
        assert_eq!(body, vec![0xCA]);
        assert_eq!(pack_bytes(&table, b"AABC", Padding::Zeros), vec![0xCA]);
        assert_eq!(unpack_bytes(&tree, &body), b"AABC");
    }

    #[test]
    fn whole_bytes_need_no_padding() {
        let data = vec![b'a'; 10_000];
        let (tree, table) = setup(&data);
        let mut packer = BitPacker::new(&table, Padding::Guarded);
        let mut out = Vec::new();
        packer.encode_chunk(&data, &mut out);
        packer.finish(&mut out);
        assert_eq!(out.len(), 1250);
        assert!(out.iter().all(|&b| b == 0xFF));
        assert_eq!(packer.bits_padding(), 0);
        assert_eq!(unpack_bytes(&tree, &out), data);
    }

    #[test]
    fn zero_padding_can_emit_a_trailing_symbol() {
        // symbol 0 gets code "0", so seven zero pad bits decode as seven more zeros
        let (tree, table) = setup(&[0u8]);
        let legacy = pack_bytes(&table, &[0u8], Padding::Zeros);
        assert_eq!(legacy, vec![0x00]);
        assert_eq!(unpack_bytes(&tree, &legacy), vec![0u8; 8]);
    }

    #[test]
    fn guarded_padding_stops_inside_a_code() {
        let (tree, table) = setup(&[0u8]);
        let body = pack_bytes(&table, &[0u8], Padding::Guarded);
        assert_eq!(body, vec![0x40]);

        let mut unpacker = BitUnpacker::new(&tree);
        let mut out = Vec::new();
        unpacker.decode_chunk(&body, &mut out);
        assert_eq!(out, vec![0u8]);
        assert!(unpacker.is_mid_code());
        assert_eq!(unpacker.bits_read(), 8);
        assert_eq!(unpacker.symbols(), 1);
    }

    #[test]
    fn packer_counts_bits() {
        let (_, table) = setup(b"AABC");
        let mut packer = BitPacker::new(&table, Padding::Guarded);
        let mut out = Vec::new();
        packer.encode_chunk(b"AA", &mut out);
        assert!(out.is_empty());
        packer.encode_chunk(b"BC", &mut out);
        packer.finish(&mut out);
        assert_eq!(packer.symbols(), 4);
        assert_eq!(packer.bits_body(), 7);
        assert_eq!(packer.bits_padding(), 1);
    }

    #[test]
    fn stream_output_ignores_chunk_size() {
        let data: Vec<u8> = (0..20_000u32).map(|i| ((i * 7919) % 61) as u8).collect();
        let (tree, table) = setup(&data);
        let expected = pack_bytes(&table, &data, Padding::Guarded);

        for size in [1usize, 3, 255, 1024, 65_536] {
            let mut packed = Vec::new();
            let mut packer = BitPacker::new(&table, Padding::Guarded);
            let totals = encode_stream(&mut data.as_slice(), &mut packed, &mut packer, size).unwrap();
            assert_eq!(packed, expected, "encode buffer {size}");
            assert_eq!(totals.bytes_in, data.len() as u64);
            assert_eq!(totals.bytes_out, expected.len() as u64);

            let mut restored = Vec::new();
            let mut unpacker = BitUnpacker::new(&tree);
            let totals = decode_stream(&mut packed.as_slice(), &mut restored, &mut unpacker, size).unwrap();
            assert_eq!(restored, data, "decode buffer {size}");
            assert_eq!(totals.bytes_out, data.len() as u64);
        }
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        let (tree, table) = setup(&[]);
        assert!(pack_bytes(&table, &[], Padding::Guarded).is_empty());
        assert!(unpack_bytes(&tree, &[]).is_empty());
    }

    #[test]
    fn write_failure_is_sink_unavailable() {
        let (_, table) = setup(b"abc");
        let mut packer = BitPacker::new(&table, Padding::Guarded);
        let err = encode_stream(&mut &b"abcabc"[..], &mut ClosedSink, &mut packer, 16).unwrap_err();
        assert!(matches!(err, HuffError::SinkUnavailable { path: None, .. }));
    }
}
