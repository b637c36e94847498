//! Type-effectiveness chart loader.

use std::path::Path;

use game_core::{ElementType, TypeChart};

use crate::loaders::{LoadResult, read_file};

/// Loader for [`TypeChart`] from RON files.
///
/// The file lists `(attack, defend, multiplier)` overrides on top of a
/// neutral table:
///
/// ```ron
/// [
///     (Water, Fire, 2.0),
///     (Electric, Ground, 0.0),
/// ]
/// ```
pub struct TypeChartLoader;

impl TypeChartLoader {
    /// Load a chart from a RON file.
    pub fn load(path: &Path) -> LoadResult<TypeChart> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load type chart {}: {}", path.display(), e))
    }

    /// Parse a chart from RON text.
    pub fn parse(content: &str) -> LoadResult<TypeChart> {
        let entries: Vec<(ElementType, ElementType, f32)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse type chart RON: {}", e))?;

        if let Some((attack, defend, multiplier)) = entries
            .iter()
            .find(|(_, _, multiplier)| !multiplier.is_finite() || *multiplier < 0.0)
        {
            anyhow::bail!(
                "Invalid multiplier {} for {:?} against {:?}",
                multiplier,
                attack,
                defend
            );
        }

        Ok(TypeChart::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::TypeChartOracle;
    use std::io::Write;

    #[test]
    fn entries_override_a_neutral_table() {
        let chart = TypeChartLoader::parse("[(Water, Fire, 2.0), (Electric, Ground, 0.0)]")
            .unwrap();
        assert_eq!(chart.multiplier(ElementType::Water, ElementType::Fire), 2.0);
        assert_eq!(chart.multiplier(ElementType::Electric, ElementType::Ground), 0.0);
        assert_eq!(chart.multiplier(ElementType::Fire, ElementType::Water), 1.0);
    }

    #[test]
    fn negative_multiplier_is_rejected() {
        let err = TypeChartLoader::parse("[(Fire, Grass, -2.0)]").unwrap_err();
        assert!(err.to_string().contains("Invalid multiplier"));
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let err = TypeChartLoader::parse("[(Shadow, Fire, 2.0)]").unwrap_err();
        assert!(err.to_string().contains("Failed to parse type chart RON"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[(Grass, Water, 2.0)]").unwrap();

        let chart = TypeChartLoader::load(file.path()).unwrap();
        assert_eq!(chart.effectiveness(ElementType::Grass, &[ElementType::Water]), 2.0);
    }
}
