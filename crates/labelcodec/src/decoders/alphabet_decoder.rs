//! # Alphabet Decoder

use crate::{
    Alphabet,
    LCResult,
    LabelCodecError,
    ProbabilityBatch,
    decoders::{LabelDecoder, RankedCandidates, ctc::ctc_collapse, ranked::rank_classes},
    types::CodeType,
};

impl<T: CodeType> LabelDecoder<T> for Alphabet<T> {
    fn decode(
        &self,
        codes: &[T],
    ) -> String {
        self.mode()
            .join(codes.iter().map(|&code| self.symbol_or_default(code)))
    }

    fn decode_ctc(
        &self,
        codes: &[T],
        null: Option<T>,
    ) -> String {
        let blank = self.blank_code();
        self.decode(&ctc_collapse(codes, blank, null.or(blank)))
    }

    fn decode_top_n_item(
        &self,
        probs: &ProbabilityBatch,
        idx: usize,
        n: usize,
    ) -> LCResult<RankedCandidates<T>> {
        if probs.classes() != self.len() {
            return Err(LabelCodecError::Shape(format!(
                "expected {} classes per step, found {}",
                self.len(),
                probs.classes()
            )));
        }
        let ranks = n.min(probs.classes());
        let mut ranked = RankedCandidates::new(self.mode(), ranks);
        for step in probs.steps(idx) {
            ranked.push_position(rank_classes(step, ranks).into_iter().map(|(class, p)| {
                let code = T::from_usize(class).unwrap_or(self.default_code());
                let symbol = T::from_usize(class)
                    .and_then(|c| self.lookup_symbol(c))
                    .unwrap_or(self.default_symbol());
                (code, symbol, p)
            }));
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlphabetOptions, CodeBatch, decoders::DEFAULT_TOP_N};

    /// `{0: '∅', 1: 'a', 2: 'b', 3: 'c'}` plus the blank at 4.
    fn abc() -> Alphabet<u32> {
        Alphabet::from_pairs(
            [(0, "\u{2205}"), (1, "a"), (2, "b"), (3, "c")],
            &AlphabetOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_decode() {
        let alphabet = abc();
        assert_eq!(alphabet.decode(&[3, 1, 2]), "cab");
        assert_eq!(alphabet.decode(&[]), "");

        // Unknown codes fall back to the default symbol.
        assert_eq!(alphabet.decode(&[1, 42, 2]), "a.b");
    }

    #[test]
    fn test_decode_words() {
        let alphabet: Alphabet<u32> = Alphabet::from_pairs(
            [(0, "the"), (1, "cat")],
            &AlphabetOptions::default().with_dictionary(true),
        )
        .unwrap();
        assert_eq!(alphabet.decode(&[0, 1, 7]), "the cat .");
    }

    #[test]
    fn test_decode_batch() -> LCResult<()> {
        let alphabet = abc();

        let batch = CodeBatch::new(vec![1, 2, 3, 3, 2, 0], 2, 3)?;
        assert_eq!(alphabet.decode_batch(&batch), vec!["abc", "cb\u{2205}"]);

        let batch = batch.with_lengths(vec![1, 2])?;
        assert_eq!(alphabet.decode_batch(&batch), vec!["a", "cb"]);

        Ok(())
    }

    #[test]
    fn test_decode_ctc() {
        let alphabet = abc();
        let blank = alphabet.blank_code().unwrap();

        assert_eq!(alphabet.decode_ctc(&[], None), "");
        assert_eq!(
            alphabet.decode_ctc(&[blank, 1, 1, blank, 2, 2, 2], None),
            "ab"
        );
        assert_eq!(alphabet.decode_ctc(&[1, blank, 1, 3, 3], None), "aac");

        // An explicit null removes that code instead.
        assert_eq!(alphabet.decode_ctc(&[1, 0, 0, 2], Some(0)), "ab");
    }

    #[test]
    fn test_decode_ctc_words() {
        let alphabet: Alphabet<u32> = Alphabet::from_pairs(
            [(0, "the"), (1, "cat")],
            &AlphabetOptions::default().with_dictionary(true),
        )
        .unwrap();
        let blank = alphabet.blank_code().unwrap();

        assert_eq!(alphabet.decode_ctc(&[blank, 0, 0, 1], None), "the cat");
        assert_eq!(alphabet.decode_ctc(&[0, blank, 0, 1, blank], None), "the the cat");
    }

    #[test]
    fn test_decode_ctc_without_blank() {
        let alphabet: Alphabet<u32> = Alphabet::from_pairs(
            [(0, "a"), (1, "b")],
            &AlphabetOptions::default().with_add_blank(false),
        )
        .unwrap();
        assert_eq!(alphabet.decode_ctc(&[0, 0, 1, 1, 0], None), "aba");
    }

    #[test]
    fn test_decode_ctc_batch() -> LCResult<()> {
        let alphabet = abc();
        let batch = CodeBatch::new(vec![4, 1, 1, 4, 2, 2, 3, 3, 0], 3, 3)?.with_lengths(vec![3, 2, 0])?;
        assert_eq!(
            alphabet.decode_ctc_batch(&batch, None),
            vec!["a", "b", ""]
        );
        Ok(())
    }

    fn probs() -> ProbabilityBatch {
        ProbabilityBatch::from_sequences(
            &[
                vec![
                    vec![0.05, 0.7, 0.1, 0.1, 0.05],
                    vec![0.1, 0.1, 0.2, 0.5, 0.1],
                ],
                vec![vec![0.0, 0.0, 0.9, 0.0, 0.1]],
            ],
            5,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_top_n() -> LCResult<()> {
        let alphabet = abc();
        let ranked = alphabet.decode_top_n(&probs(), 2)?;
        assert_eq!(ranked.len(), 2);

        let first = &ranked[0];
        assert_eq!(first.ranks(), 2);
        assert_eq!(first.len(), 2);
        assert_eq!(first.symbols()[0], vec!["a", "c"]);
        assert_eq!(first.probabilities()[0], vec![0.7, 0.5]);
        assert_eq!(first.symbols()[1], vec!["c", "b"]);
        assert_eq!(first.codes()[1], vec![3, 2]);
        assert_eq!(first.best_path(), "ac");

        let second = &ranked[1];
        assert_eq!(second.len(), 1);
        assert_eq!(second.symbols()[1], vec!["\u{2205}"]);
        Ok(())
    }

    #[test]
    fn test_decode_top_n_caps_ranks() -> LCResult<()> {
        let alphabet = abc();
        let ranked = alphabet.decode_top_n(&probs(), DEFAULT_TOP_N)?;
        assert_eq!(ranked[0].ranks(), 5);
        assert_eq!(ranked[0].probabilities()[4], vec![0.05, 0.1]);
        Ok(())
    }

    #[test]
    fn test_decode_top_n_class_mismatch() {
        let alphabet = abc();

        let narrow = ProbabilityBatch::new(vec![0.2, 0.3, 0.5], 1, 1, 3).unwrap();
        assert!(matches!(
            alphabet.decode_top_n(&narrow, 3),
            Err(LabelCodecError::Shape(_))
        ));

        let wide = ProbabilityBatch::new(vec![0.1; 9], 1, 1, 9).unwrap();
        assert!(matches!(
            alphabet.decode_top_n_item(&wide, 0, 1),
            Err(LabelCodecError::Shape(_))
        ));
    }

    #[test]
    fn test_decode_top_1_is_greedy() -> LCResult<()> {
        let alphabet = abc();
        let probs = probs();
        for (idx, ranked) in alphabet.decode_top_n(&probs, 1)?.iter().enumerate() {
            let greedy: Vec<u32> = probs
                .steps(idx)
                .map(|step| {
                    let (best, _) = step
                        .iter()
                        .enumerate()
                        .fold((0, f32::MIN), |acc, (i, &p)| if p > acc.1 { (i, p) } else { acc });
                    best as u32
                })
                .collect();
            assert_eq!(ranked.ranks(), 1);
            assert_eq!(ranked.codes()[0], greedy);
            assert_eq!(ranked.best_path(), alphabet.decode(&greedy));
        }
        Ok(())
    }

    #[test]
    fn test_decode_top_n_with_lengths() -> LCResult<()> {
        let alphabet = abc();
        let probs = probs().with_lengths(vec![1, 0])?;
        let ranked = alphabet.decode_top_n(&probs, 3)?;
        assert_eq!(ranked[0].len(), 1);
        assert!(ranked[1].is_empty());
        assert_eq!(ranked[1].ranks(), 3);
        Ok(())
    }
}
