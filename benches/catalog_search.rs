//! Filtering cost over a large cached catalog

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use sheet_catalog::domain::matching::SearchTerm;
use sheet_catalog::infrastructure::config::{ColumnMapping, DisplayConfig};
use sheet_catalog::infrastructure::row_mapper::RowMapper;
use sheet_catalog::{CatalogView, CategoryFilter};

const CATEGORIES: [&str; 6] = [
    "Joyería",
    "Decoración",
    "Hogar",
    "Accesorios",
    "Papelería",
    "Cosmética",
];

fn sheet_rows(count: usize) -> Vec<Value> {
    let mut rows = vec![json!(["Title", "Desc", "Price", "Img", "Cat", "Id"])];
    rows.extend((0..count).map(|i| {
        json!([
            format!("Producto artesanal {i}"),
            format!("Descripción número {i} con detalles de luna y plata"),
            format!("{}", 100 + i),
            "",
            CATEGORIES[i % CATEGORIES.len()],
            ""
        ])
    }));
    rows
}

fn bench_catalog(c: &mut Criterion) {
    let rows = sheet_rows(10_000);
    let mapper = RowMapper::new(ColumnMapping::default(), &DisplayConfig::default());

    c.bench_function("map_rows_10k", |b| {
        b.iter(|| mapper.map_rows(black_box(&rows)));
    });

    let products = mapper.map_rows(&rows);

    c.bench_function("search_10k", |b| {
        let term = SearchTerm::new("LUNA");
        b.iter(|| {
            black_box(&products)
                .iter()
                .filter(|p| term.matches(p))
                .count()
        });
    });

    c.bench_function("view_category_and_search_10k", |b| {
        let mut view = CatalogView::default();
        view.set_all_products(products.clone());
        view.filter_by_category(CategoryFilter::Named("hogar".to_string()));
        b.iter(|| black_box(view.filter_products("artesanal 9")));
    });
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
