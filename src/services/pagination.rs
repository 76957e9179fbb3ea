//! Paginación
//!
//! Este módulo corta la lista filtrada en páginas y calcula la metadata.
//! Páginas fuera de rango no son un error: devuelven slice vacío con
//! metadata correcta.

use crate::dto::search_dto::SearchMeta;

/// Cortar `items` en la página pedida y calcular la metadata.
///
/// `page` llega >= 1 y `per_page` en [1, 50] por construcción del query;
/// el caso `per_page == 0` no puede alcanzarse pero no debe panickear.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> (Vec<T>, SearchMeta) {
    let total = items.len();
    let pages = if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        1
    };

    let start = page.saturating_sub(1).saturating_mul(per_page);
    let sliced: Vec<T> = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(per_page).collect()
    };

    let meta = SearchMeta {
        count: sliced.len(),
        total,
        page,
        per_page,
        pages,
    };
    (sliced, meta)
}
