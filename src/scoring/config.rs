/// Weights and thresholds for the rule-based scorer.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Polarity granted before any marker is counted
    pub base_offset: f64,
    /// Extra polarity per distinct marker on the winning side
    pub marker_step: f64,
    /// Ceiling on base polarity magnitude (the exclamation bonus is applied after it)
    pub max_base_magnitude: f64,
    /// Tied texts draw polarity uniformly from [-tie_spread, tie_spread]
    pub tie_spread: f64,

    /// Exclamation bonus per `!`, capped at `max_exclamations`
    pub exclamation_step: f64,
    pub max_exclamations: usize,

    /// Sentiment bands: above `positive_threshold` is positive,
    /// below `negative_threshold` is negative
    pub positive_threshold: f64,
    pub negative_threshold: f64,

    pub subjectivity_floor: f64,
    pub subjectivity_weight: f64,
    pub subjectivity_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_offset: 0.1,
            marker_step: 0.15,
            max_base_magnitude: 0.9,
            tie_spread: 0.2,
            exclamation_step: 0.1,
            max_exclamations: 3,
            positive_threshold: 0.25,
            negative_threshold: -0.25,
            subjectivity_floor: 0.2,
            subjectivity_weight: 0.8,
            subjectivity_cap: 0.9,
        }
    }
}
