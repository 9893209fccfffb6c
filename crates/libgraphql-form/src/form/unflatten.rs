use crate::form::ArgumentTree;
use crate::form::ArgumentValue;
use crate::form::FieldPath;
use thiserror::Error;

type Result<T> = std::result::Result<T, UnflattenError>;

/// Rebuild the nested argument structure implied by a sequence of
/// `(path, value)` pairs.
///
/// Every segment but the last names an intermediate object, created the
/// first time any path passes through it and shared by every later path with
/// the same prefix. The value is assigned at the last segment. Key order in
/// each object follows the order paths first reach it.
pub fn unflatten<I>(pairs: I) -> Result<ArgumentTree>
where
    I: IntoIterator<Item = (FieldPath, ArgumentValue)>,
{
    let mut tree = ArgumentTree::new();
    for (path, value) in pairs {
        insert_at_path(&mut tree, &path, value)?;
    }
    Ok(tree)
}

/// The inverse of [`unflatten()`]: every non-object value in `tree` paired
/// with the path that leads to it, in pre-order.
pub fn flatten(tree: &ArgumentTree) -> Vec<(FieldPath, ArgumentValue)> {
    let mut pairs = vec![];
    for (name, value) in tree {
        flatten_into(FieldPath::schema_root(name), value, &mut pairs);
    }
    pairs
}

fn flatten_into(
    path: FieldPath,
    value: &ArgumentValue,
    pairs: &mut Vec<(FieldPath, ArgumentValue)>,
) {
    match value {
        ArgumentValue::Object(tree) => {
            for (name, value) in tree {
                flatten_into(path.schema_child(name.as_str()), value, pairs);
            }
        },
        _ => pairs.push((path, value.to_owned())),
    }
}

fn insert_at_path(
    tree: &mut ArgumentTree,
    path: &FieldPath,
    value: ArgumentValue,
) -> Result<()> {
    let segments = path.segments();
    let (leaf_name, parent_segments) = match segments.split_last() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut node = tree;
    for (depth, segment) in parent_segments.iter().enumerate() {
        let entry = node.entry(segment.to_owned())
            .or_insert_with(|| ArgumentValue::Object(ArgumentTree::new()));
        node = match entry {
            ArgumentValue::Object(child) => child,
            _ => return Err(UnflattenError::PathConflict {
                conflicting_path: path.truncated(depth + 1),
                path: path.to_owned(),
            }),
        };
    }

    if let Some(ArgumentValue::Object(_)) = node.get(leaf_name) {
        return Err(UnflattenError::PathConflict {
            conflicting_path: path.to_owned(),
            path: path.to_owned(),
        });
    }
    node.insert(leaf_name.to_owned(), value);
    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnflattenError {
    #[error(
        "Unable to place a value at `{path}`: `{conflicting_path}` already \
        holds a value of a different shape"
    )]
    PathConflict {
        conflicting_path: FieldPath,
        path: FieldPath,
    },
}
