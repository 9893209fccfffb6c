use anyhow::Context;
use libgraphql_form::schema::TypeGraph;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Schema source arguments shared by every command that needs a
/// [`TypeGraph`].
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory. `.json` files are loaded as \
             introspection results, all others as GraphQL SDL.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files.",
        name="SCHEMA_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}
impl SchemaArgs {
    pub(crate) fn load(&self) -> anyhow::Result<TypeGraph> {
        let file_paths = self.find_schema_files()?;
        log::debug!("Loading {} schema files.", file_paths.len());

        TypeGraph::builder()
            .load_files(file_paths)
            .and_then(|builder| builder.build())
            .context("Unable to build the schema")
    }

    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let schema_file_exts: HashSet<&str> =
            self.schema_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for path in &self.schema_paths {
            // A file named explicitly is loaded regardless of its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan {path:?} for schema files",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_schema_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| schema_file_exts.contains(&*ext));
                if has_schema_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping non-schema file: {entry_path:#?}.");
                }
            }
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {} (looked for {})",
                self.schema_paths.iter()
                    .map(|path| format!("{path:?}"))
                    .collect::<Vec<_>>()
                    .join(", "),
                schema_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
        Ok(file_paths)
    }
}
