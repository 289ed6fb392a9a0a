use anyhow::Context;

use zonebook_registry::FileQuery;

/// Rebuild the catalog from the backing files named on the command line.
fn main() -> anyhow::Result<()> {
    let catalog = zonebook_service::bootstrap()?;

    for path in std::env::args().skip(1) {
        let report = catalog
            .open_file(&path)
            .with_context(|| format!("failed to open {path}"))?;
        let snapshot = catalog.read_file(&FileQuery::by_id(report.file))?;

        tracing::info!(
            path = %snapshot.path,
            checksum = %snapshot.checksum,
            zones = report.zones,
            records = report.records,
            skipped_zones = report.skipped_zones.len(),
            "file indexed"
        );
    }

    Ok(())
}
