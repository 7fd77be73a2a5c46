use std::str::FromStr;

use catalog::domain::category::{Category, NewCategory};
use catalog::domain::product::{NewProduct, UpdateProduct};
use catalog::domain::types::{
    CategoryId, CategoryName, Description, ProductName, ProductPrice, StockQuantity,
};
use catalog::pagination::{PageRequest, Paginated};
use catalog::repository::errors::RepositoryError;
use catalog::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository, ProductListQuery,
    ProductReader, ProductWriter,
};
use rust_decimal::Decimal;

mod common;

fn create_category(repo: &DieselRepository, name: &str, description: Option<&str>) -> Category {
    let new_category = NewCategory::new(
        CategoryName::new(name).unwrap(),
        description.map(Description::new),
    );
    repo.create_category(&new_category).unwrap()
}

fn new_product(name: &str, cents: i64, category_id: Option<CategoryId>) -> NewProduct {
    NewProduct::new(
        ProductName::new(name).unwrap(),
        None,
        ProductPrice::from_cents(cents).unwrap(),
        None,
        category_id,
    )
}

#[test]
fn test_product_create_then_find() {
    let test_db = common::TestDb::new("test_product_create_then_find.db");
    let repo = test_db.repo();
    let category = create_category(&repo, "Periféricos", None);

    let new = NewProduct::new(
        ProductName::new("Teclado").unwrap(),
        Some(Description::new("ABNT2")),
        ProductPrice::new(Decimal::from_str("149.90").unwrap()).unwrap(),
        Some(StockQuantity::new(12).unwrap()),
        Some(category.id),
    );
    let created = repo.create_product(&new).unwrap();

    assert_eq!(created.name, new.name);
    assert_eq!(created.description, new.description);
    assert_eq!(created.price, new.price);
    assert_eq!(created.stock, new.stock);
    assert_eq!(created.category_id, Some(category.id));
    assert_eq!(created.category.as_ref(), Some(&category));

    let found = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(found, created);

    let again = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(again, found);
}

#[test]
fn test_product_without_category() {
    let test_db = common::TestDb::new("test_product_without_category.db");
    let repo = test_db.repo();

    let created = repo.create_product(&new_product("Cabo", 1000, None)).unwrap();
    assert_eq!(created.stock.get(), 0);
    assert!(created.category_id.is_none());
    assert!(created.category.is_none());
}

#[test]
fn test_second_page_of_twenty_five_products() {
    let test_db = common::TestDb::new("test_second_page_of_twenty_five_products.db");
    let repo = test_db.repo();
    let category = create_category(&repo, "Cabos", None);

    for i in 1..=25 {
        repo.create_product(&new_product(&format!("Produto {i}"), 100 * i, Some(category.id)))
            .unwrap();
    }

    let page = PageRequest::Paginated { page: 2, limit: 10 };
    let (total, products) = repo
        .list_products(ProductListQuery::new().page(page))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(products.len(), 10);
    // Newest first: page two holds products 15 down to 6.
    assert_eq!(products[0].name.as_str(), "Produto 15");
    assert_eq!(products[9].name.as_str(), "Produto 6");
    assert!(products.iter().all(|p| p.category.is_some()));

    let envelope = Paginated::new(products, total, page);
    assert_eq!(envelope.total_pages, 3);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let test_db = common::TestDb::new("test_page_past_the_end_is_empty.db");
    let repo = test_db.repo();

    for i in 1..=5 {
        repo.create_product(&new_product(&format!("Item {i}"), 100, None))
            .unwrap();
    }

    let page = PageRequest::Paginated { page: 3, limit: 10 };
    let (total, products) = repo
        .list_products(ProductListQuery::new().page(page))
        .unwrap();
    assert_eq!(total, 5);
    assert!(products.is_empty());
    assert_eq!(Paginated::new(products, total, page).total_pages, 1);
}

#[test]
fn test_unpaginated_empty_listing() {
    let test_db = common::TestDb::new("test_unpaginated_empty_listing.db");
    let repo = test_db.repo();

    let (total, products) = repo.list_products(ProductListQuery::new()).unwrap();
    let envelope = Paginated::new(products, total, PageRequest::Unpaginated);

    assert!(envelope.data.is_empty());
    assert_eq!(envelope.total, 0);
    assert_eq!(envelope.page, 1);
    assert_eq!(envelope.limit, 0);
    assert_eq!(envelope.total_pages, 1);
}

#[test]
fn test_product_filters() {
    let test_db = common::TestDb::new("test_product_filters.db");
    let repo = test_db.repo();
    let mice = create_category(&repo, "Mouses", None);
    let keyboards = create_category(&repo, "Teclados", None);

    repo.create_product(&new_product("Mouse Gamer", 9990, Some(mice.id)))
        .unwrap();
    repo.create_product(&new_product("mouse pad", 2990, Some(mice.id)))
        .unwrap();
    repo.create_product(&new_product("Teclado Mecânico", 29990, Some(keyboards.id)))
        .unwrap();
    repo.create_product(&new_product("Mousepad XL", 4990, None))
        .unwrap();

    let (total, _) = repo
        .list_products(ProductListQuery::new().search("MOUSE"))
        .unwrap();
    assert_eq!(total, 3);

    let (total, products) = repo
        .list_products(ProductListQuery::new().search("mouse").category_id(mice.id))
        .unwrap();
    assert_eq!(total, 2);
    assert!(products.iter().all(|p| p.category_id == Some(mice.id)));

    let (total, products) = repo
        .list_products(ProductListQuery::new().category_id(keyboards.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(products[0].category.as_ref().unwrap().name.as_str(), "Teclados");
}

#[test]
fn test_product_partial_update() {
    let test_db = common::TestDb::new("test_product_partial_update.db");
    let repo = test_db.repo();
    let category = create_category(&repo, "Áudio", None);

    let original = repo
        .create_product(&new_product("Fone", 19990, Some(category.id)))
        .unwrap();

    let mut product = original.clone();
    product.apply_update(UpdateProduct {
        description: Some(Some(Description::new("new"))),
        ..UpdateProduct::default()
    });
    let updated = repo.update_product(&product).unwrap();

    assert_eq!(updated.description.as_ref().unwrap().as_str(), "new");
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.price, original.price);
    assert_eq!(updated.stock, original.stock);
    assert_eq!(updated.category, original.category);

    let mut product = updated;
    product.apply_update(UpdateProduct {
        category_id: Some(None),
        ..UpdateProduct::default()
    });
    let cleared = repo.update_product(&product).unwrap();
    assert!(cleared.category_id.is_none());
    assert!(cleared.category.is_none());
}

#[test]
fn test_product_delete() {
    let test_db = common::TestDb::new("test_product_delete.db");
    let repo = test_db.repo();

    let product = repo.create_product(&new_product("Cabo", 500, None)).unwrap();
    repo.delete_product(product.id).unwrap();

    assert!(repo.get_product_by_id(product.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_product(product.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_category_search_is_case_insensitive() {
    let test_db = common::TestDb::new("test_category_search_is_case_insensitive.db");
    let repo = test_db.repo();

    let abc = create_category(&repo, "ABCDEF", None);
    let by_description = create_category(&repo, "Outros", Some("abc em minúsculas"));
    create_category(&repo, "Cabos", None);

    let (total, categories) = repo
        .list_categories(CategoryListQuery::new().search("abc"))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(categories, vec![abc, by_description]);
}

#[test]
fn test_category_pagination() {
    let test_db = common::TestDb::new("test_category_pagination.db");
    let repo = test_db.repo();

    for i in 1..=12 {
        create_category(&repo, &format!("Categoria {i}"), None);
    }

    let (total, categories) = repo
        .list_categories(CategoryListQuery::new().paginate(2, 5))
        .unwrap();
    assert_eq!(total, 12);
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Categoria 6",
            "Categoria 7",
            "Categoria 8",
            "Categoria 9",
            "Categoria 10"
        ]
    );
}

#[test]
fn test_category_update_and_clear_description() {
    let test_db = common::TestDb::new("test_category_update_and_clear_description.db");
    let repo = test_db.repo();

    let mut category = create_category(&repo, "Casa", Some("Utilidades"));
    category.description = None;
    category.name = CategoryName::new("Casa e Cozinha").unwrap();

    let updated = repo.update_category(&category).unwrap();
    assert_eq!(updated, category);
    assert_eq!(repo.get_category_by_id(category.id).unwrap(), Some(category));
}

#[test]
fn test_category_delete_clears_product_references() {
    let test_db = common::TestDb::new("test_category_delete_clears_product_references.db");
    let repo = test_db.repo();
    let doomed = create_category(&repo, "Descontinuados", None);
    let kept = create_category(&repo, "Ativos", None);

    let orphans: Vec<_> = (1..=3)
        .map(|i| {
            repo.create_product(&new_product(&format!("Velho {i}"), 100, Some(doomed.id)))
                .unwrap()
        })
        .collect();
    let survivor = repo
        .create_product(&new_product("Novo", 100, Some(kept.id)))
        .unwrap();

    repo.delete_category(doomed.id).unwrap();

    assert!(repo.get_category_by_id(doomed.id).unwrap().is_none());
    for orphan in orphans {
        let product = repo.get_product_by_id(orphan.id).unwrap().unwrap();
        assert!(product.category_id.is_none());
        assert!(product.category.is_none());
    }

    let survivor = repo.get_product_by_id(survivor.id).unwrap().unwrap();
    assert_eq!(survivor.category_id, Some(kept.id));

    assert!(matches!(
        repo.delete_category(doomed.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_search_folds_accented_capitals() {
    let test_db = common::TestDb::new("test_search_folds_accented_capitals.db");
    let repo = test_db.repo();

    let audio = create_category(&repo, "ÁUDIO E VÍDEO", None);
    create_category(&repo, "Informática", Some("Computadores"));
    repo.create_product(&new_product("CAFÉ TORRADO", 1590, None))
        .unwrap();
    repo.create_product(&new_product("Chá", 990, None)).unwrap();

    let (total, categories) = repo
        .list_categories(CategoryListQuery::new().search("áudio"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(categories, vec![audio]);

    let (total, products) = repo
        .list_products(ProductListQuery::new().search("café"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(products[0].name.as_str(), "CAFÉ TORRADO");

    let (total, _) = repo
        .list_products(ProductListQuery::new().search("CHÁ"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let test_db = common::TestDb::new("test_search_treats_wildcards_literally.db");
    let repo = test_db.repo();

    create_category(&repo, "Promoção 50%", None);
    create_category(&repo, "Cabos_USB", None);
    create_category(&repo, "Outros", None);

    let (total, categories) = repo
        .list_categories(CategoryListQuery::new().search("%"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(categories[0].name.as_str(), "Promoção 50%");

    let (total, categories) = repo
        .list_categories(CategoryListQuery::new().search("_"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(categories[0].name.as_str(), "Cabos_USB");
}

#[test]
fn test_text_is_stored_as_sent() {
    let test_db = common::TestDb::new("test_text_is_stored_as_sent.db");
    let repo = test_db.repo();

    let category = create_category(&repo, " Games ", Some(""));
    let found = repo.get_category_by_id(category.id).unwrap().unwrap();
    assert_eq!(found.name.as_str(), " Games ");
    assert_eq!(found.description.as_ref().map(|d| d.as_str()), Some(""));

    let new = NewProduct::new(
        ProductName::new("  Mouse sem fio ").unwrap(),
        Some(Description::new("  ")),
        ProductPrice::from_cents(5990).unwrap(),
        None,
        None,
    );
    let created = repo.create_product(&new).unwrap();
    let found = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(found.name, new.name);
    assert_eq!(found.description, new.description);
}
