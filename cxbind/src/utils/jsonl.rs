//! Serialization utilities for reading and writing catalogue shards.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::api::entity::Entity;

/// Write a collection of entities to a file in JSON-lines format
pub fn write_jsonl_file<P: AsRef<Path>>(
    file_path: P,
    entities: &[Entity],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = fs::File::create(&file_path)?;
    for entity in entities {
        let json_line = entity.to_jsonl_string()?;
        writeln!(file, "{json_line}")?;
    }
    file.flush()?;
    Ok(())
}

/// Read entities from a JSON-lines file
pub fn read_jsonl_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<Entity>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file_path)?;
    let mut entities = Vec::new();

    // Each line is a separate JSON object
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entity: Entity = serde_json::from_str(line)
            .map_err(|e| format!("{}:{}: {}", file_path.as_ref().display(), line_num + 1, e))?;

        entities.push(entity);
    }

    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::entity::{EntityKind, HeaderLocation};
    use tempfile::NamedTempFile;

    #[test]
    fn jsonl_round_trip() {
        let entities = vec![
            Entity::new(
                EntityKind::Struct,
                "CXSourceLocation",
                "#[repr(C)] pub struct CXSourceLocation { pub int_data: u32 }",
                HeaderLocation {
                    file: "clang-c/Index.h".to_string(),
                    line: 100,
                },
            ),
            Entity::new(
                EntityKind::Function,
                "clang_getCString",
                "extern \"C\" { pub fn clang_getCString(); }",
                HeaderLocation {
                    file: "clang-c/CXString.h".to_string(),
                    line: 12,
                },
            ),
            Entity::new(
                EntityKind::Enum,
                "CXCursorKind",
                "pub enum CXCursorKind { UnexposedDecl }",
                Default::default(),
            ),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path();

        write_jsonl_file(temp_path, &entities).unwrap();
        let read_back = read_jsonl_file(temp_path).unwrap();

        assert_eq!(entities, read_back);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let temp_file = NamedTempFile::new().unwrap();
        let entity = Entity::new(
            EntityKind::Const,
            "CXError_Success",
            "pub const CXError_Success: u32 = 0;",
            Default::default(),
        );
        let json = entity.to_jsonl_string().unwrap();
        fs::write(temp_file.path(), format!("\n{json}\n\n")).unwrap();

        let read_back = read_jsonl_file(temp_file.path()).unwrap();
        assert_eq!(read_back, vec![entity]);
    }
}
