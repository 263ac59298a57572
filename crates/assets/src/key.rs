use std::path::Path;
use vtt_core::ID;
use vtt_worlds::World;

/// Derives the object key for an upload.
///
/// Layout: `{folder|"worlds"}/{world_id}/{uuid}-{base}{ext}` where `base`
/// is the caller-supplied filename (if any) or the original file's stem,
/// and `ext` is the original file's extension. The per-world prefix
/// namespaces objects by world; the fresh uuid makes keys unique within
/// the provider + bucket.
pub fn object_key(
    original: &str,
    folder: Option<&str>,
    filename: Option<&str>,
    world: ID<World>,
) -> String {
    let path = Path::new(original);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let base = filename.filter(|f| !f.is_empty()).unwrap_or(stem);
    let prefix = match folder.filter(|f| !f.is_empty()) {
        Some(folder) => format!("{}/{}", folder, world),
        None => format!("worlds/{}", world),
    };
    format!("{}/{}-{}{}", prefix, uuid::Uuid::now_v7(), base, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_namespaced_by_world() {
        let world: ID<World> = ID::default();
        let key = object_key("map.png", None, None, world);
        assert!(key.starts_with(&format!("worlds/{}/", world)));
        assert!(key.ends_with("-map.png"));
    }
    #[test]
    fn caller_folder_prefixes_world() {
        let world: ID<World> = ID::default();
        let key = object_key("map.png", Some("tokens"), None, world);
        assert!(key.starts_with(&format!("tokens/{}/", world)));
    }
    #[test]
    fn caller_filename_replaces_stem() {
        let world: ID<World> = ID::default();
        let key = object_key("IMG_4421.jpeg", None, Some("castle"), world);
        assert!(key.ends_with("-castle.jpeg"));
        assert!(!key.contains("IMG_4421"));
    }
    #[test]
    fn extensionless_original() {
        let world: ID<World> = ID::default();
        let key = object_key("map", None, None, world);
        assert!(key.ends_with("-map"));
    }
    #[test]
    fn keys_are_unique_per_call() {
        let world: ID<World> = ID::default();
        let a = object_key("map.png", None, None, world);
        let b = object_key("map.png", None, None, world);
        assert_ne!(a, b);
    }
}
