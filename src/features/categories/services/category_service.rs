use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::clients::CategoryApi;
use crate::features::categories::dtos::{
    CategoryNode, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::features::categories::models::Category;

/// Direction for keyboard/button driven reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Result of a reorder attempt.
///
/// Illegal moves (onto self, onto the current parent, into the dragged
/// subtree, past the list edge) are no-ops rather than errors, so callers
/// can wire them straight to drop handlers without special-casing.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move was persisted; carries the freshly refetched forest
    Moved(Vec<CategoryNode>),
    Unchanged,
}

/// Service for category operations: CRUD, tree assembly, and reordering
pub struct CategoryService {
    client: Arc<dyn CategoryApi>,
}

impl CategoryService {
    pub fn new(client: Arc<dyn CategoryApi>) -> Self {
        Self { client }
    }

    /// Flat list, in backend order
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.client.list().await
    }

    /// Flat list assembled into the root forest
    pub async fn list_tree(&self) -> Result<Vec<CategoryNode>> {
        let categories = self.client.list().await?;
        CategoryNode::build_forest(&categories)
    }

    pub async fn get(&self, id: i64) -> Result<Category> {
        self.client.get(id).await
    }

    pub async fn create(&self, request: CreateCategoryRequest) -> Result<Category> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.create(&request).await
    }

    pub async fn update(&self, id: i64, request: UpdateCategoryRequest) -> Result<Category> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.client.update(id, &request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(id).await
    }

    pub async fn roots(&self) -> Result<Vec<Category>> {
        self.client.roots().await
    }

    pub async fn subcategories(&self, parent_id: i64) -> Result<Vec<Category>> {
        self.client.subcategories(parent_id).await
    }

    pub async fn descendants(&self, id: i64) -> Result<Vec<Category>> {
        self.client.descendants(id).await
    }

    pub async fn by_name(&self, name: &str) -> Result<Category> {
        self.client.by_name(name).await
    }

    pub async fn by_depth(&self, depth: i32) -> Result<Vec<Category>> {
        self.client.by_depth(depth).await
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Category>> {
        self.client.search(keyword).await
    }

    /// Drag-drop move: make `target` the parent of `dragged_id`.
    ///
    /// `None` promotes the category to root. Dropping onto itself, onto its
    /// current parent, or onto one of its own descendants is a no-op.
    pub async fn move_to(&self, dragged_id: i64, target: Option<i64>) -> Result<MoveOutcome> {
        let categories = self.client.list().await?;
        let dragged = Self::find_record(&categories, dragged_id)?;

        let new_parent = match target {
            Some(target_id) => {
                if target_id == dragged_id || dragged.parent_id == Some(target_id) {
                    return Ok(MoveOutcome::Unchanged);
                }
                if !categories.iter().any(|c| c.id == target_id) {
                    return Err(AppError::NotFound(format!(
                        "Category {} not found",
                        target_id
                    )));
                }
                if self.is_in_subtree(&categories, dragged_id, target_id)? {
                    tracing::debug!(
                        "Ignoring move of category {} onto its descendant {}",
                        dragged_id,
                        target_id
                    );
                    return Ok(MoveOutcome::Unchanged);
                }
                Some(target_id)
            }
            None => {
                if dragged.parent_id.is_none() {
                    return Ok(MoveOutcome::Unchanged);
                }
                None
            }
        };

        self.reparent(dragged.clone(), new_parent).await
    }

    /// Directional move: adopt the parent of the neighbor at flat-list index
    /// -1 (up) or +1 (down).
    ///
    /// Neighbor adjacency is over the full flat list as fetched, not scoped
    /// to siblings. An index past either end, a neighbor under the same
    /// parent, or a neighbor whose parent sits inside the dragged subtree is
    /// a no-op.
    pub async fn move_by(&self, dragged_id: i64, direction: MoveDirection) -> Result<MoveOutcome> {
        let categories = self.client.list().await?;
        let position = categories
            .iter()
            .position(|c| c.id == dragged_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", dragged_id)))?;

        let neighbor_index = match direction {
            MoveDirection::Up => position.checked_sub(1),
            MoveDirection::Down => {
                let next = position + 1;
                (next < categories.len()).then_some(next)
            }
        };
        let Some(neighbor_index) = neighbor_index else {
            return Ok(MoveOutcome::Unchanged);
        };
        let Some(neighbor) = categories.get(neighbor_index) else {
            return Ok(MoveOutcome::Unchanged);
        };

        let dragged = Self::find_record(&categories, dragged_id)?;
        let new_parent = neighbor.parent_id;

        if new_parent == dragged.parent_id || new_parent == Some(dragged_id) {
            return Ok(MoveOutcome::Unchanged);
        }
        if let Some(parent_id) = new_parent {
            if self.is_in_subtree(&categories, dragged_id, parent_id)? {
                return Ok(MoveOutcome::Unchanged);
            }
        }

        self.reparent(dragged.clone(), new_parent).await
    }

    /// Persist the new parent, then refetch and rebuild the whole forest
    /// instead of patching the local tree.
    async fn reparent(&self, category: Category, new_parent: Option<i64>) -> Result<MoveOutcome> {
        let id = category.id;
        let mut request = UpdateCategoryRequest::from(category);
        request.parent_id = new_parent;

        self.client.update(id, &request).await.map_err(|e| {
            tracing::error!("Failed to move category {}: {}", id, e);
            e
        })?;

        let forest = self.list_tree().await?;
        Ok(MoveOutcome::Moved(forest))
    }

    fn is_in_subtree(&self, categories: &[Category], root_id: i64, id: i64) -> Result<bool> {
        let forest = CategoryNode::build_forest(categories)?;
        Ok(CategoryNode::find(&forest, root_id)
            .is_some_and(|node| node.contains_descendant(id)))
    }

    fn find_record(categories: &[Category], id: i64) -> Result<&Category> {
        categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
