//! Helpers for integration tests.

use std::io::Write;

use pushkind_classifieds::repository::SnapshotRepository;
use tempfile::NamedTempFile;

/// Snapshot document written to a temporary file for the duration of a test.
pub struct TestSnapshot {
    file: NamedTempFile,
}

impl TestSnapshot {
    pub fn new(document: &serde_json::Value) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(document.to_string().as_bytes())
            .expect("Failed to write snapshot");
        file.flush().expect("Failed to flush snapshot");
        TestSnapshot { file }
    }

    pub fn repository(&self) -> SnapshotRepository {
        SnapshotRepository::from_path(self.file.path()).expect("Snapshot should load")
    }
}

/// Marketplace snapshot shared by the integration tests.
pub fn marketplace_document() -> serde_json::Value {
    serde_json::json!({
        "categories": [
            {
                "id": "A",
                "name": "Property",
                "children": [
                    { "id": "B", "name": "Property for Rent", "children": [
                        { "id": "C", "name": "Rooms" }
                    ] }
                ]
            },
            { "id": "E", "name": "Electronics" },
            { "id": "F", "name": "Collectibles" }
        ],
        "plans": [
            { "type": "Ads", "categories": ["Properties"], "isActive": true },
            { "type": "Ads", "categories": ["Electronics"], "isActive": true },
            { "type": "Ads", "categories": ["Collectibles"], "isActive": false }
        ],
        "subscriptions": {
            "seller": [
                {
                    "plan": { "type": "Ads", "categories": ["Electronics"] },
                    "isActive": true, "status": "active",
                    "adsAvailable": 3, "adsUsed": 0,
                    "featuredAdsAvailable": 0, "featuredAdsUsed": 0
                },
                {
                    "plan": { "type": "ads", "categories": ["electronics"] },
                    "isActive": true, "status": "confirmed",
                    "adsAvailable": 4, "adsUsed": 2
                },
                {
                    "plan": { "type": "Ads", "categories": ["Properties"] },
                    "isActive": true, "status": "active",
                    "adsAvailable": 2, "adsUsed": 5,
                    "featuredAdsAvailable": 1
                },
                {
                    "plan": { "type": "Ads" },
                    "isActive": true, "status": "pending",
                    "adsAvailable": 50
                },
                {
                    "plan": { "type": "Ads" },
                    "isActive": false, "status": "active",
                    "adsAvailable": 50
                }
            ]
        }
    })
}
