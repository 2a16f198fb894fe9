use rand::Rng;

use crate::catalog::Catalog;
use crate::error::QuizError;

pub const CANDIDATE_COUNT: usize = 4;

/// One multiple-choice round: pick the glyph for a romanized reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    /// Presentation order, pairwise distinct
    pub candidates: [&'static str; CANDIDATE_COUNT],
    pub answer: &'static str,
}

impl QuizQuestion {
    pub fn contains(&self, glyph: &str) -> bool {
        self.candidates.contains(&glyph)
    }

    pub fn candidate(&self, glyph: &str) -> Option<&'static str> {
        self.candidates.iter().copied().find(|c| *c == glyph)
    }

    pub fn position_of_answer(&self) -> Option<usize> {
        self.candidates.iter().position(|c| *c == self.answer)
    }
}

/// Builds a fresh question from the whole catalog.
///
/// Glyphs are the identity of an answer: an entry listed in two categories
/// (ん is both a base kana and a special mora) is a single candidate, so it
/// can never show up twice or as a second correct option.
pub fn next_question<R>(catalog: &Catalog, rng: &mut R) -> Result<QuizQuestion, QuizError>
where
    R: Rng + ?Sized,
{
    let pool: Vec<_> = catalog.pool().collect();

    let mut glyphs: Vec<&'static str> = Vec::with_capacity(pool.len());
    for entry in &pool {
        if !glyphs.contains(&entry.kana) {
            glyphs.push(entry.kana);
        }
    }

    if glyphs.len() < CANDIDATE_COUNT {
        return Err(QuizError::NotEnoughGlyphs {
            needed: CANDIDATE_COUNT,
            available: glyphs.len(),
        });
    }

    let answer = pool[rng.random_range(0..pool.len())];

    glyphs.retain(|g| *g != answer.kana);
    let distractors = sample_without_replacement(&mut glyphs, CANDIDATE_COUNT - 1, rng);

    let mut candidates = [answer.kana; CANDIDATE_COUNT];
    candidates[1..].copy_from_slice(distractors);
    shuffle(&mut candidates, rng);

    Ok(QuizQuestion {
        prompt: answer.romaji,
        candidates,
        answer: answer.kana,
    })
}

/// Fisher-Yates shuffle
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Partial Fisher-Yates: moves `k` uniformly chosen items to the front and
/// returns them. Asking for more than `items.len()` returns everything.
pub fn sample_without_replacement<'a, T, R>(items: &'a mut [T], k: usize, rng: &mut R) -> &'a [T]
where
    R: Rng + ?Sized,
{
    let k = k.min(items.len());
    for i in 0..k {
        let j = rng.random_range(i..items.len());
        items.swap(i, j);
    }
    &items[..k]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::fixtures::small;
    use crate::catalog::{Category, KanaEntry};

    #[test]
    fn question_has_four_distinct_candidates_and_one_answer() {
        let catalog = small();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let q = next_question(&catalog, &mut rng).unwrap();

            let distinct: HashSet<_> = q.candidates.iter().collect();
            assert_eq!(distinct.len(), CANDIDATE_COUNT);

            let matching: Vec<_> = q
                .candidates
                .iter()
                .filter(|c| catalog.find_by_glyph(c).map(|e| e.romaji) == Some(q.prompt))
                .collect();
            assert_eq!(matching, vec![&q.answer]);
        }
    }

    #[test]
    fn shared_glyph_never_appears_twice() {
        let catalog = small();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            let q = next_question(&catalog, &mut rng).unwrap();
            let n_count = q.candidates.iter().filter(|c| **c == "ん").count();
            assert!(n_count <= 1, "{q:?}");
        }
    }

    #[test]
    fn answer_position_is_roughly_uniform() {
        let catalog = small();
        let mut rng = StdRng::seed_from_u64(2024);
        let rounds = 4000;
        let mut hits = [0usize; CANDIDATE_COUNT];

        for _ in 0..rounds {
            let q = next_question(&catalog, &mut rng).unwrap();
            hits[q.position_of_answer().unwrap()] += 1;
        }

        for count in hits {
            let share = count as f64 / rounds as f64;
            assert!((share - 0.25).abs() < 0.04, "skewed positions: {hits:?}");
        }
    }

    #[test]
    fn too_few_glyphs_is_an_error_not_a_loop() {
        const THREE: &[KanaEntry] = &[
            KanaEntry {
                kana: "あ",
                katakana: "ア",
                romaji: "a",
                examples: &[],
                grid: None,
            },
            KanaEntry {
                kana: "い",
                katakana: "イ",
                romaji: "i",
                examples: &[],
                grid: None,
            },
            KanaEntry {
                kana: "い",
                katakana: "イ",
                romaji: "i",
                examples: &[],
                grid: None,
            },
            KanaEntry {
                kana: "う",
                katakana: "ウ",
                romaji: "u",
                examples: &[],
                grid: None,
            },
        ];
        const TINY: &[Category] = &[Category {
            id: "tiny",
            name: "Tiny",
            description: "",
            entries: THREE,
        }];

        let catalog = Catalog::new(TINY).unwrap();
        let err = next_question(&catalog, &mut StdRng::seed_from_u64(0)).unwrap_err();

        assert_eq!(
            err,
            QuizError::NotEnoughGlyphs {
                needed: 4,
                available: 3
            }
        );
    }

    #[test]
    fn sampling_is_without_replacement() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut items: Vec<u32> = (0..10).collect();

        let picked = sample_without_replacement(&mut items, 3, &mut rng).to_vec();
        let distinct: HashSet<_> = picked.iter().collect();
        assert_eq!(picked.len(), 3);
        assert_eq!(distinct.len(), 3);

        let mut two = [1, 2];
        assert_eq!(sample_without_replacement(&mut two, 5, &mut rng).len(), 2);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut items, &mut rng);
        items.sort();
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }
}
