// Property tests for the writer → reader round trip.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    use t2t_core::example::TextToTextExample;
    use t2t_core::io::{read_dialogues, write_data, write_data_with_rng};

    fn example_strategy() -> impl Strategy<Value = TextToTextExample> {
        (any::<String>(), any::<String>(), "[a-z0-9_-]{1,12}", any::<u32>(), any::<u32>())
            .prop_map(|(src, tgt, dialog_id, turn, frame)| {
                TextToTextExample::new(src, tgt, dialog_id, turn).with_frame(frame)
            })
    }

    fn key(e: &TextToTextExample) -> (String, String, String, i64) {
        (e.src.clone(), e.tgt.clone(), e.dialog_id.clone(), i64::from(e.turn))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn ordered_write_reads_back_identically(mut examples in prop::collection::vec(example_strategy(), 0..20)) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("p.tfrecord");

            let written = write_data(&mut examples, &path, false).unwrap();
            let decoded = read_dialogues(&path).unwrap();

            prop_assert_eq!(written, examples.len());
            prop_assert_eq!(decoded.len(), examples.len());
            for (d, e) in decoded.iter().zip(&examples) {
                prop_assert_eq!(&d.input, &e.src);
                prop_assert_eq!(&d.value, &e.tgt);
                prop_assert_eq!(&d.dialog_id, &e.dialog_id);
                prop_assert_eq!(d.turn, i64::from(e.turn));
            }
        }

        #[test]
        fn shuffled_write_preserves_multiset(
            examples in prop::collection::vec(example_strategy(), 1..20),
            seed in any::<u64>(),
        ) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("s.tfrecord");
            let mut shuffled = examples.clone();

            write_data_with_rng(&mut shuffled, &path, true, &mut StdRng::seed_from_u64(seed)).unwrap();

            let mut got: Vec<_> = read_dialogues(&path)
                .unwrap()
                .into_iter()
                .map(|d| (d.input, d.value, d.dialog_id, d.turn))
                .collect();
            let mut want: Vec<_> = examples.iter().map(key).collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }
}
