//! Catalog loaders.
//!
//! RON formats:
//! - races:   `Vec<RaceDefinition>`
//! - enemies: `Vec<EnemyTemplate>`
//! - items:   `Vec<ItemDefinition>`

use std::path::Path;

use crate::enemies::EnemyTemplate;
use crate::items::ItemDefinition;
use crate::races::RaceDefinition;

use super::{LoadResult, read_file};

/// Loader for the race catalog.
pub struct RaceLoader;

impl RaceLoader {
    /// Load race definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RaceDefinition>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse race catalog RON: {}", e))
    }
}

/// Loader for the bestiary.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy templates from a RON file.
    ///
    /// Every template is validated by spawning a throwaway combatant so
    /// bad data is rejected at load time, not mid-fight.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        let templates: Vec<EnemyTemplate> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for template in &templates {
            template.to_combatant().map_err(|e| {
                anyhow::anyhow!("Invalid enemy template '{}': {}", template.name, e)
            })?;
        }
        Ok(templates)
    }
}

/// Loader for the item catalog.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyCatalog;
    use crate::races::RaceCatalog;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn race_catalog_round_trips_through_ron() {
        let builtin: Vec<_> = RaceCatalog::builtin().iter().cloned().collect();
        let ron_text = ron::to_string(&builtin).unwrap();
        let file = write_temp(&ron_text);

        let loaded = RaceLoader::load(file.path()).unwrap();
        assert_eq!(loaded, builtin);

        let catalog = RaceCatalog::from_definitions(loaded);
        assert!(catalog.get("Human").is_some());
    }

    #[test]
    fn enemy_loader_rejects_invalid_templates() {
        let builtin: Vec<_> = EnemyCatalog::builtin().iter().cloned().collect();
        let mut broken = builtin.clone();
        broken[0].name = String::new();

        let file = write_temp(&ron::to_string(&broken).unwrap());
        let err = EnemyLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid enemy template"));

        let file = write_temp(&ron::to_string(&builtin).unwrap());
        assert_eq!(EnemyLoader::load(file.path()).unwrap(), builtin);
    }

    #[test]
    fn item_loader_reports_parse_errors() {
        let file = write_temp("not ron at all [");
        let err = ItemLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse item catalog"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RaceLoader::load(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
