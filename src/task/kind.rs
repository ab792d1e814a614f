//! The two task variants and their tuning options.

use crate::types::{ClusterRecord, CommentsRecord};
use serde::de::DeserializeOwned;

/// What distinguishes one task variant from another: the endpoint family
/// and the shape of one result record.
pub trait TaskKind {
    /// Path segment, as in `/{ENDPOINT}/push/{task_id}`.
    const ENDPOINT: &'static str;
    type Record: DeserializeOwned;
}

/// Near-duplicate clustering (`/cluster/*`).
#[derive(Debug, Clone, Copy)]
pub struct Cluster;

impl TaskKind for Cluster {
    const ENDPOINT: &'static str = "cluster";
    type Record = ClusterRecord;
}

/// Opinion extraction over comments (`/comments/*`).
#[derive(Debug, Clone, Copy)]
pub struct Comments;

impl TaskKind for Comments {
    const ENDPOINT: &'static str = "comments";
    type Record = CommentsRecord;
}

/// Optional parameters for the analysis trigger.
///
/// `alpha` controls cluster granularity and `beta` the similarity cut-off;
/// unset values leave the service defaults in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(alpha) = self.alpha {
            query.push(("alpha", alpha.to_string()));
        }
        if let Some(beta) = self.beta {
            query.push(("beta", beta.to_string()));
        }
        query
    }
}
