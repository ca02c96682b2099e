use crate::domain::category::{category_path, search_category_paths};
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Look up a single category anywhere in the tree.
///
/// The returned DTO carries the breadcrumb path from its root.
pub fn show_category<R>(category_id: &CategoryId, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let tree = repo.list_category_tree().map_err(|e| {
        log::error!("Failed to load category tree: {e}");
        ServiceError::Internal
    })?;

    category_path(&tree, category_id.as_str())
        .and_then(|path| CategoryDto::from_path(&path))
        .ok_or(ServiceError::NotFound)
}

/// Categories whose name contains `term`, in tree order.
pub fn search_categories<R>(term: &str, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let tree = match repo.list_category_tree() {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("Failed to load category tree: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(search_category_paths(&tree, term)
        .iter()
        .filter_map(|path| CategoryDto::from_path(path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryNode;
    use crate::domain::types::CategoryName;
    use crate::repository::test::TestRepository;

    fn node(id: &str, name: &str, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode::new(CategoryId::new(id).unwrap(), CategoryName::new(name).unwrap())
            .with_children(children)
    }

    fn sample_repo() -> TestRepository {
        TestRepository::new(vec![node(
            "1",
            "Property",
            vec![
                node("2", "Property for Rent", vec![]),
                node("3", "Property for Sale", vec![]),
            ],
        )])
    }

    #[test]
    fn shows_nested_category_with_path() {
        let dto = show_category(&CategoryId::new("2").unwrap(), &sample_repo()).unwrap();
        assert_eq!(dto.name, "Property for Rent");
        assert_eq!(dto.path, vec!["Property", "Property for Rent"]);
        assert!(dto.is_leaf);
    }

    #[test]
    fn missing_category_is_not_found() {
        let err = show_category(&CategoryId::new("99").unwrap(), &sample_repo()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn searches_by_name_fragment() {
        let hits = search_categories("for", &sample_repo()).unwrap();
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn search_breadcrumbs_belong_to_each_hit() {
        let repo = TestRepository::new(vec![
            node("1", "Motors", vec![node("7", "Cars", vec![])]),
            node("2", "Vehicles", vec![node("7", "Classic Cars", vec![])]),
        ]);
        let hits = search_categories("cars", &repo).unwrap();
        assert_eq!(hits[0].path, vec!["Motors", "Cars"]);
        assert_eq!(hits[1].path, vec!["Vehicles", "Classic Cars"]);
    }
}
