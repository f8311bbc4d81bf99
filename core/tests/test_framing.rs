// Framing tests for the record container:
//
// * `encode_record`
// * `parse_record_header`
// * `decode_record_frame`
// * `RecordWriter` / `RecordReader`

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use t2t_core::constants::{RECORD_FOOTER_LEN, RECORD_HEADER_LEN};
    use t2t_core::tfrecord::{
        decode_record_frame, encode_record, parse_record_header, RecordError, RecordReader, RecordWriter,
    };
    use t2t_core::utils::masked_crc32c;

// # ✅ 1. Encode → decode (canonical path)

    #[test]
    fn encode_decode_single_frame() {
        let wire = encode_record(b"hello records");
        let payload = decode_record_frame(&wire).unwrap();
        assert_eq!(payload, b"hello records");
    }

// # ✅ 2. Byte layout matches the container

    #[test]
    fn wire_layout_is_length_crc_data_crc() {
        let data = b"abc";
        let wire = encode_record(data);

        assert_eq!(wire.len(), RECORD_HEADER_LEN + data.len() + RECORD_FOOTER_LEN);
        assert_eq!(&wire[0..8], &3u64.to_le_bytes());
        assert_eq!(&wire[8..12], &masked_crc32c(&3u64.to_le_bytes()).to_le_bytes());
        assert_eq!(&wire[12..15], data);
        assert_eq!(&wire[15..19], &masked_crc32c(data).to_le_bytes());
    }

    #[test]
    fn header_only_parse() {
        let wire = encode_record(&[7u8; 40]);
        let header = parse_record_header(&wire).unwrap();
        assert_eq!(header.length, 40);
        assert_eq!(header.framed_len() as usize, wire.len());
    }

// # ❌ 3. Truncated input is rejected

    #[test]
    fn truncated_header_is_rejected() {
        let wire = encode_record(b"x");
        assert!(matches!(
            parse_record_header(&wire[..RECORD_HEADER_LEN - 1]),
            Err(RecordError::Truncated)
        ));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let wire = encode_record(b"0123456789");
        assert!(matches!(
            decode_record_frame(&wire[..wire.len() - 2]),
            Err(RecordError::Truncated)
        ));
    }

// # ❌ 4. Corruption is detected

    #[test]
    fn corrupt_length_is_rejected() {
        let mut wire = encode_record(b"payload");
        wire[0] ^= 0x01;
        assert!(matches!(decode_record_frame(&wire), Err(RecordError::CorruptLength { .. })));
    }

    #[test]
    fn corrupt_data_is_rejected() {
        let mut wire = encode_record(b"payload");
        wire[RECORD_HEADER_LEN] ^= 0xFF;
        assert!(matches!(decode_record_frame(&wire), Err(RecordError::CorruptData { .. })));
    }

    #[test]
    fn extra_bytes_are_rejected() {
        let mut wire = encode_record(b"payload");
        wire.push(0xAA);
        assert!(matches!(decode_record_frame(&wire), Err(RecordError::LengthMismatch { .. })));
    }

// # ✅ 5. Zero-length payload works

    #[test]
    fn zero_length_payload_is_allowed() {
        let wire = encode_record(b"");
        assert!(decode_record_frame(&wire).unwrap().is_empty());
    }

// # ✅ 6. Writer / reader stream

    #[test]
    fn writer_matches_encode_record() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_record(b"one").unwrap();
        writer.write_record(b"two").unwrap();
        assert_eq!(writer.records_written(), 2);
        let bytes = writer.finish().unwrap();

        let mut expected = encode_record(b"one");
        expected.extend(encode_record(b"two"));
        assert_eq!(bytes, expected);
    }

    #[test]
    fn reader_yields_records_in_order() {
        let mut writer = RecordWriter::new(Vec::new());
        let payloads: [&[u8]; 3] = [b"a", b"", b"ccc"];
        for p in payloads {
            writer.write_record(p).unwrap();
        }
        let bytes = writer.finish().unwrap();

        let records: Vec<Vec<u8>> = RecordReader::new(Cursor::new(bytes))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records, vec![b"a".to_vec(), Vec::new(), b"ccc".to_vec()]);
    }

    #[test]
    fn empty_stream_has_no_records() {
        let mut reader = RecordReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn reader_reports_truncation_then_stops() {
        let mut bytes = encode_record(b"complete");
        let second = encode_record(b"cut short");
        bytes.extend_from_slice(&second[..second.len() - 3]);

        let mut reader = RecordReader::new(Cursor::new(bytes));
        assert_eq!(reader.next().unwrap().unwrap(), b"complete");
        assert!(matches!(reader.next(), Some(Err(RecordError::Truncated))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn reader_without_checksums_accepts_corrupt_data() {
        let mut bytes = encode_record(b"payload");
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        let mut strict = RecordReader::new(Cursor::new(bytes.clone()));
        assert!(matches!(strict.read_record(), Err(RecordError::CorruptData { .. })));

        let mut lax = RecordReader::new(Cursor::new(bytes)).without_checksums();
        assert_eq!(lax.read_record().unwrap().unwrap(), b"payload");
    }
}
