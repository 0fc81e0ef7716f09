use advocate_storage::{
	db::Db,
	seed,
	source::{PostgresRecords, RecordSource},
};
use advocate_testkit::TestDatabase;

async fn connect() -> Option<(TestDatabase, Db)> {
	let Some(base_dsn) = advocate_testkit::env_dsn() else {
		eprintln!("Skipping Postgres tests; set ADVOCATE_PG_DSN to run this test.");

		return None;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = Db::connect(&advocate_config::Postgres {
		dsn: test_db.dsn().to_string(),
		pool_max_conns: 2,
		acquire_timeout_ms: 5_000,
	})
	.await
	.expect("Failed to connect to test database.");

	Some((test_db, db))
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ADVOCATE_PG_DSN to run."]
async fn ensure_schema_is_idempotent() {
	let Some((test_db, db)) = connect().await else { return };

	db.ensure_schema().await.expect("Failed to create schema.");
	db.ensure_schema().await.expect("Failed to re-run schema.");

	assert!(db.fetch_advocates().await.expect("Failed to read advocates.").is_empty());

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ADVOCATE_PG_DSN to run."]
async fn inserted_advocates_read_back_in_order() {
	let Some((test_db, db)) = connect().await else { return };
	let records = seed::embedded().expect("Embedded dataset must parse.");

	db.ensure_schema().await.expect("Failed to create schema.");

	let inserted = db.insert_advocates(&records).await.expect("Failed to insert advocates.");

	assert_eq!(inserted.len(), records.len());
	assert!(inserted.iter().all(|record| record.id.is_some() && record.created_at.is_some()));

	let snapshot = PostgresRecords::new(db.clone())
		.snapshot()
		.await
		.expect("Failed to snapshot advocates.");
	let names: Vec<String> = snapshot.iter().map(|record| record.full_name()).collect();
	let expected: Vec<String> = records.iter().map(|record| record.full_name()).collect();

	assert_eq!(names, expected);
	assert_eq!(snapshot[0].specialties, records[0].specialties);

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
