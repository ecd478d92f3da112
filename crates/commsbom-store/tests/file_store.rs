use commsbom_core::{
    AggregationCache, Catalog, InfrastructureDetails, LocationDraft, ProductId, ProjectDetails,
    Rates, Session,
};
use commsbom_store::{ConfigStore, FileBlobStore, SavedConfiguration, StoreError, STORE_KEY};

fn designed_session() -> Session {
    let mut session = Session::new(ProjectDetails {
        config_name: "Theatre".to_string(),
        designer: "Robin".to_string(),
        email: "robin@example.com".to_string(),
        organization: "Playhouse".to_string(),
    });
    session
        .add_location(LocationDraft {
            name: "Stage".to_string(),
            wired_count: 4,
            wireless_count: 2,
            headsets: commsbom_core::HeadsetSplit {
                std_one_ear: 6,
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();
    session.set_infrastructure(InfrastructureDetails::default());
    session
}

#[test]
fn save_then_restore_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();
    let rates = Rates::default();
    let mut cache = AggregationCache::new();

    let session = designed_session();
    let quote = session.quote(&catalog, &rates, &mut cache);
    let saved = SavedConfiguration::from_session(&session, &quote);
    assert_eq!(saved.total_cost, quote.breakdown.grand_total);
    assert_eq!(saved.products, quote.quantities.sparse());

    let mut store = ConfigStore::new(FileBlobStore::new(dir.path(), None));
    store.save(saved.clone()).unwrap();

    // A fresh store on the same directory sees the entry.
    let reopened = ConfigStore::new(FileBlobStore::new(dir.path(), None));
    let loaded = reopened.get(saved.id).unwrap().unwrap();
    assert_eq!(loaded, saved);

    let restored = loaded.restore(&catalog);
    assert!(restored.is_manual_edit());
    assert_eq!(restored.project.config_name, "Theatre");
    assert_eq!(restored.locations(), session.locations());
    assert_eq!(
        restored.final_quantities(&catalog, &mut cache),
        quote.quantities.zero_filled(&catalog)
    );
    assert_eq!(
        restored
            .final_quantities(&catalog, &mut cache)
            .get(ProductId::WiredBeltpack),
        4
    );
}

#[test]
fn corrupt_file_surfaces_as_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{STORE_KEY}.json")), "garbage").unwrap();

    let store = ConfigStore::new(FileBlobStore::new(dir.path(), None));
    let err = store.list().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}
