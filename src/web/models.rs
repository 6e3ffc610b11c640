use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{AdjacencyGraph, Graph};
use crate::io::DistanceReport;

/// Parameters for a distance computation on a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancesRequest {
    pub source: usize,
}

/// Distances returned by the API
pub type DistancesResponse = DistanceReport<i64>;

/// Error response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

/// Public view of a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// An uploaded graph. The graph is shared read-only between concurrent requests.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<AdjacencyGraph<i64>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: AdjacencyGraph<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}
