use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub parent_id: Option<i64>,
}

/// Request body for updating a category (full record, as the backend expects)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub parent_id: Option<i64>,
}

impl From<Category> for UpdateCategoryRequest {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            description: category.description,
            parent_id: category.parent_id,
        }
    }
}

/// Category enriched with its ordered children.
///
/// Transient view shape: built fresh from the flat list on every fetch and
/// never mutated in place - rebuilding is the only update mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Build the forest of root nodes from a flat category list.
    ///
    /// A node is a root when `parent_id` is `None`; every other record is
    /// appended to its parent's children in input iteration order, so child
    /// order equals input order (there is no explicit rank field). A
    /// `parent_id` naming an id absent from the input fails with
    /// [`AppError::DanglingParent`].
    ///
    /// O(n) time and space; pure function of its input.
    pub fn build_forest(categories: &[Category]) -> Result<Vec<CategoryNode>> {
        let ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();

        let mut roots: Vec<&Category> = Vec::new();
        let mut children_of: HashMap<i64, Vec<&Category>> = HashMap::new();

        for category in categories {
            match category.parent_id {
                None => roots.push(category),
                Some(parent_id) => {
                    if !ids.contains(&parent_id) {
                        return Err(AppError::DanglingParent {
                            id: category.id,
                            parent_id,
                        });
                    }
                    children_of.entry(parent_id).or_default().push(category);
                }
            }
        }

        Ok(roots
            .into_iter()
            .map(|root| Self::attach(root, &children_of))
            .collect())
    }

    fn attach(category: &Category, children_of: &HashMap<i64, Vec<&Category>>) -> CategoryNode {
        let children = children_of
            .get(&category.id)
            .map(|direct| {
                direct
                    .iter()
                    .map(|child| Self::attach(child, children_of))
                    .collect()
            })
            .unwrap_or_default();

        CategoryNode {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id,
            children,
        }
    }

    /// Tree-walk locating the node with `id` anywhere in the forest
    pub fn find(forest: &[CategoryNode], id: i64) -> Option<&CategoryNode> {
        for node in forest {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = Self::find(&node.children, id) {
                return Some(found);
            }
        }
        None
    }

    /// True when `id` appears anywhere below this node (self excluded)
    pub fn contains_descendant(&self, id: i64) -> bool {
        self.children
            .iter()
            .any(|child| child.id == id || child.contains_descendant(id))
    }

    /// Total number of nodes in the forest
    pub fn count(forest: &[CategoryNode]) -> usize {
        forest
            .iter()
            .map(|node| 1 + Self::count(&node.children))
            .sum()
    }
}
