use super::write_atomically;
use crate::{
    aa::{AAFramework, LabelType},
    analysis::{FrameworkProperties, PropertyAnalyzer, SemanticsRelationships},
    solvers::{EnumerationLimits, SelfAttackPolicy, SemanticsEngine},
    utils::ArgSet,
};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::{io::Write, path::Path};

/// The grounded extension under both self-attack policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroundedByPolicy {
    /// The grounded extension under the classical policy.
    pub classical: Vec<String>,
    /// The grounded extension under the enhanced policy.
    pub enhanced: Vec<String>,
}

/// A summary of the analysis of a framework.
///
/// The complete, preferred and stable extensions, as well as the relationships, are computed under the classical self-attack policy.
/// Extensions are given as lists of argument labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The structural properties.
    pub properties: FrameworkProperties,
    /// The self-attack policy used for the enumerations.
    pub policy: SelfAttackPolicy,
    /// The grounded extensions.
    pub grounded: GroundedByPolicy,
    /// The complete extensions.
    pub complete: Vec<Vec<String>>,
    /// The preferred extensions.
    pub preferred: Vec<Vec<String>>,
    /// The stable extensions.
    pub stable: Vec<Vec<String>>,
    /// The relationships between the semantics.
    pub relationships: SemanticsRelationships,
    /// Whether an enumeration was stopped by the limits.
    pub partial: bool,
}

impl AnalysisReport {
    /// Analyzes a framework.
    pub fn new<T: LabelType>(af: &AAFramework<T>, limits: EnumerationLimits) -> Self {
        let classical = SemanticsEngine::new(af, SelfAttackPolicy::Classical);
        let enhanced = SemanticsEngine::new(af, SelfAttackPolicy::Enhanced);
        let labels = |set: &ArgSet| -> Vec<String> {
            classical
                .arguments_of(set)
                .iter()
                .map(|a| a.label().to_string())
                .collect()
        };
        let grounded = classical.grounded_extension();
        let complete = classical.complete_extensions(limits);
        let preferred = classical.preferred_extensions(limits);
        let stable = classical.stable_extensions(limits);
        let relationships =
            SemanticsRelationships::from_extensions(&grounded, &complete, &preferred, &stable);
        Self {
            properties: PropertyAnalyzer::new(af).properties(),
            policy: SelfAttackPolicy::Classical,
            grounded: GroundedByPolicy {
                classical: labels(&grounded),
                enhanced: labels(&enhanced.grounded_extension()),
            },
            complete: complete.iter().map(labels).collect(),
            preferred: preferred.iter().map(labels).collect(),
            stable: stable.iter().map(labels).collect(),
            partial: relationships.partial,
            relationships,
        }
    }
}

/// Analyzes a framework and writes the [AnalysisReport] to a JSON file.
///
/// The file is written atomically (see [write_atomically]).
pub fn export_analysis_report<T: LabelType>(
    af: &AAFramework<T>,
    path: impl AsRef<Path>,
    limits: EnumerationLimits,
) -> Result<()> {
    let path = path.as_ref();
    let report = AnalysisReport::new(af, limits);
    write_atomically(path, |w| {
        serde_json::to_writer_pretty(&mut *w, &report)?;
        writeln!(w)?;
        Ok(())
    })
    .with_context(|| format!("while exporting an analysis report to {}", path.display()))?;
    info!("exported the analysis report to {}", path.display());
    Ok(())
}
