//! Emotion categories and their badge emoji
//!
//! The server's label is free text (`"happy"`, `"Happy"`, `"very_sad"`), so
//! categories are matched by case-insensitive substring, first match wins.

/// Emotion categories the badge distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Fear,
    Disgust,
    Neutral,
}

/// Match order for label lookup
const MATCH_ORDER: [(&str, Emotion); 6] = [
    ("happy", Emotion::Happy),
    ("sad", Emotion::Sad),
    ("angry", Emotion::Angry),
    ("surprise", Emotion::Surprise),
    ("fear", Emotion::Fear),
    ("disgust", Emotion::Disgust),
];

impl Emotion {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        MATCH_ORDER
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|&(_, emotion)| emotion)
            .unwrap_or(Emotion::Neutral)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Happy => "😄",
            Emotion::Sad => "😢",
            Emotion::Angry => "😡",
            Emotion::Surprise => "😲",
            Emotion::Fear => "😨",
            Emotion::Disgust => "🤢",
            Emotion::Neutral => "🙂",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(Emotion::from_label("Happy"), Emotion::Happy);
        assert_eq!(Emotion::from_label("ANGRY"), Emotion::Angry);
        assert_eq!(Emotion::from_label("surprised"), Emotion::Surprise);
    }

    #[test]
    fn test_unmatched_label_is_neutral() {
        assert_eq!(Emotion::from_label("neutral").emoji(), "🙂");
        assert_eq!(Emotion::from_label("Unknown").emoji(), "🙂");
        assert_eq!(Emotion::from_label("").emoji(), "🙂");
    }

    #[test]
    fn test_first_match_wins() {
        // "happy" is checked before "sad"
        assert_eq!(Emotion::from_label("sad_but_happy"), Emotion::Happy);
    }

    #[test]
    fn test_emoji_table() {
        assert_eq!(Emotion::from_label("sad").emoji(), "😢");
        assert_eq!(Emotion::from_label("fear").emoji(), "😨");
        assert_eq!(Emotion::from_label("disgust").emoji(), "🤢");
    }
}
