use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Per-table row totals shown on the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_services: u64,
    pub total_posts: u64,
    pub total_reviews: u64,
    pub total_contacts: u64,
}
