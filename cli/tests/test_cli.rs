#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use huff_cli::{report, run, Cli};
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("huff").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn encode_then_decode_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("book.txt");
        let payload = b"she sells sea shells by the sea shore".repeat(40);
        fs::write(&input, &payload).unwrap();

        let enc = run(&parse(&["encode", input.to_str().unwrap()])).unwrap();
        let packed = dir.path().join("book.huf");
        assert!(packed.exists());
        assert_eq!(enc.bytes_in, payload.len() as u64);
        assert_eq!(enc.bytes_out, fs::metadata(&packed).unwrap().len());

        let restored = dir.path().join("book.out");
        run(&parse(&["decode", packed.to_str().unwrap(), restored.to_str().unwrap()])).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), payload);
    }

    #[test]
    fn tree_file_drives_encode_with_tree() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("sample.txt");
        let other = dir.path().join("other.txt");
        fs::write(&sample, b"aaaaaaaabbbbccd".repeat(20)).unwrap();
        fs::write(&other, b"xyz unrelated bytes 0123").unwrap();

        run(&parse(&["tree", sample.to_str().unwrap()])).unwrap();
        let tree = dir.path().join("sample.htree");
        assert_eq!(fs::metadata(&tree).unwrap().len(), 510);

        let packed = dir.path().join("other_packed");
        run(&parse(&[
            "encode-with-tree",
            other.to_str().unwrap(),
            tree.to_str().unwrap(),
            packed.to_str().unwrap(),
        ]))
        .unwrap();
        let packed = dir.path().join("other_packed.huf");
        let bytes = fs::read(&packed).unwrap();
        assert_eq!(&bytes[..510], fs::read(&tree).unwrap().as_slice());

        let restored = dir.path().join("other.back");
        run(&parse(&["decode", packed.to_str().unwrap(), restored.to_str().unwrap()])).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), fs::read(&other).unwrap());
    }

    #[test]
    fn missing_input_reports_context() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = run(&parse(&["encode", missing.to_str().unwrap()])).unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("encoding"));
        assert!(text.contains("source unavailable"));
    }

    #[test]
    fn json_report_is_valid_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("j.bin");
        fs::write(&input, [1u8, 2, 3, 3, 3]).unwrap();
        let cli = parse(&["--json", "encode", input.to_str().unwrap()]);
        let snapshot = run(&cli).unwrap();
        let line = report(&snapshot, cli.json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["bytes_in"], 5);
        assert_eq!(value["bytes_header"], 510);
    }

    #[test]
    fn summary_line_names_both_sizes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("s.txt");
        fs::write(&input, b"abc").unwrap();
        let snapshot = run(&parse(&["encode", input.to_str().unwrap()])).unwrap();
        let line = report(&snapshot, false).unwrap();
        assert!(line.ends_with(&format!("3 bytes in / {} bytes out", snapshot.bytes_out)));
        assert!(line.contains(" seconds. "));
    }
}
