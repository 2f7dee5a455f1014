//! Static word tables behind the scorer.

/// Word valences on a `[-1.0, 1.0]` scale, tuned for short chat messages.
pub(crate) const VALENCES: &[(&str, f32)] = &[
    // Positive
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("beautiful", 0.7),
    ("best", 0.8),
    ("better", 0.4),
    ("brilliant", 0.8),
    ("cool", 0.5),
    ("delighted", 0.8),
    ("delightful", 0.75),
    ("enjoy", 0.6),
    ("enjoyed", 0.6),
    ("enjoying", 0.6),
    ("excellent", 0.85),
    ("excited", 0.7),
    ("exciting", 0.7),
    ("fantastic", 0.85),
    ("fine", 0.3),
    ("fun", 0.6),
    ("glad", 0.6),
    ("good", 0.5),
    ("great", 0.7),
    ("happy", 0.65),
    ("helpful", 0.5),
    ("impressed", 0.65),
    ("impressive", 0.7),
    ("interesting", 0.4),
    ("joy", 0.7),
    ("like", 0.3),
    ("liked", 0.35),
    ("likes", 0.3),
    ("love", 0.7),
    ("loved", 0.75),
    ("lovely", 0.7),
    ("loves", 0.7),
    ("nice", 0.5),
    ("outstanding", 0.85),
    ("perfect", 0.9),
    ("pleasant", 0.55),
    ("pleased", 0.6),
    ("positive", 0.5),
    ("positivity", 0.6),
    ("smooth", 0.4),
    ("success", 0.6),
    ("successful", 0.6),
    ("superb", 0.85),
    ("thank", 0.5),
    ("thanks", 0.5),
    ("wonderful", 0.85),
    ("works", 0.3),
    // Negative
    ("afraid", -0.45),
    ("angry", -0.65),
    ("annoyed", -0.5),
    ("annoying", -0.55),
    ("awful", -0.85),
    ("bad", -0.6),
    ("boring", -0.45),
    ("broken", -0.5),
    ("confused", -0.35),
    ("confusing", -0.4),
    ("crash", -0.6),
    ("crashed", -0.6),
    ("crashes", -0.6),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("disgusting", -0.8),
    ("dislike", -0.5),
    ("dreadful", -0.8),
    ("dumb", -0.6),
    ("error", -0.35),
    ("errors", -0.35),
    ("fail", -0.6),
    ("failed", -0.6),
    ("failing", -0.6),
    ("failure", -0.65),
    ("frustrated", -0.65),
    ("frustrating", -0.65),
    ("frustration", -0.6),
    ("furious", -0.8),
    ("garbage", -0.65),
    ("hate", -0.8),
    ("hated", -0.8),
    ("hates", -0.8),
    ("hopeless", -0.7),
    ("horrible", -0.85),
    ("issue", -0.3),
    ("issues", -0.35),
    ("lousy", -0.6),
    ("mess", -0.5),
    ("miserable", -0.75),
    ("nasty", -0.65),
    ("pain", -0.5),
    ("painful", -0.55),
    ("poor", -0.45),
    ("problem", -0.35),
    ("problems", -0.4),
    ("rubbish", -0.6),
    ("sad", -0.6),
    ("scared", -0.5),
    ("sick", -0.4),
    ("slow", -0.35),
    ("stupid", -0.7),
    ("sucks", -0.7),
    ("terrible", -0.85),
    ("tired", -0.35),
    ("trash", -0.6),
    ("ugly", -0.6),
    ("unhappy", -0.6),
    ("upset", -0.55),
    ("useless", -0.7),
    ("waste", -0.5),
    ("worried", -0.45),
    ("worry", -0.4),
    ("worse", -0.5),
    ("worst", -0.9),
    ("wrong", -0.4),
];

/// Words that flip the valence of the word they precede.
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't", "don't", "doesn't", "didn't",
    "isn't", "aren't", "wasn't", "weren't", "won't", "wouldn't", "shouldn't", "couldn't", "hardly",
    "barely", "without",
];

/// Words that scale the valence of the word they precede.
pub(crate) const INTENSIFIERS: &[(&str, f32)] = &[
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.4),
    ("totally", 1.4),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Multiplier applied to a negated word. Flips the sign and halves the
/// magnitude, since "not good" lands softer than "bad".
pub(crate) const NEGATION_FACTOR: f32 = -0.5;
