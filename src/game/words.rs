/// The fixed word and hint table rounds are drawn from.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub hint: &'static str,
}

pub const WORDS: [WordEntry; 6] = [
    WordEntry {
        word: "puppy",
        hint: "Small young dog, often very playful.",
    },
    WordEntry {
        word: "ball",
        hint: "A round toy used for throwing and catching.",
    },
    WordEntry {
        word: "fetch",
        hint: "A command and game where you throw something and the dog returns it.",
    },
    WordEntry {
        word: "park",
        hint: "A public outdoor place with grass, good for walks.",
    },
    WordEntry {
        word: "leash",
        hint: "A strap used to control a dog on walks.",
    },
    WordEntry {
        word: "biscuit",
        hint: "A tasty treat often given as a reward.",
    },
];

#[cfg(test)]
pub(crate) fn index_of(word: &str) -> Option<usize> {
    WORDS.iter().position(|e| e.word == word)
}
