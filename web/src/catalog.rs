use anyhow::Context;
use pawmatch_core::Catalog;
use serde::Deserialize;

const BUILTIN_CATALOG: &str = include_str!("../catalog.toml");

#[derive(Deserialize)]
struct CatalogFile {
    symbols: Catalog,
}

pub(crate) fn parse(source: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = toml::from_str(source).context("could not parse card catalog")?;
    Ok(file.symbols)
}

pub(crate) fn builtin() -> anyhow::Result<Catalog> {
    parse(BUILTIN_CATALOG).context("built-in catalog is invalid")
}
