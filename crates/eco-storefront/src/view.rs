//! View composition: pure functions from session state to markup.
//!
//! Each section renderer takes the state it depends on and returns an HTML
//! string; [`render_page`] composes the full storefront. Nothing here
//! mutates state — intents flow back through [`crate::Session::apply`] and
//! [`crate::Session::checkout`].

use crate::checkout::CheckoutStatus;
use crate::session::Session;
use eco_commerce::prelude::*;

/// Render the full storefront page.
pub fn render_page(session: &Session) -> String {
    format!(
        r#"<div class="container">
<header>
    <h1>Eco Trend</h1>
    <p>Os melhores produtos sustentáveis para você!</p>
</header>
{}
<main class="grid">
{}
{}
</main>
</div>"#,
        render_filters(session.filter()),
        render_product_grid(&session.visible_products()),
        render_cart(session.cart(), session.checkout_status()),
    )
}

/// Render the category and price selectors with the current selection.
pub fn render_filters(filter: &FilterState) -> String {
    let category_options: String = std::iter::once(render_option(
        "Todos",
        "Todas as Categorias",
        filter.category == CategoryFilter::Todos,
    ))
    .chain(Category::ALL.iter().map(|category| {
        render_option(
            category.as_str(),
            category.as_str(),
            filter.category == CategoryFilter::Only(*category),
        )
    }))
    .collect();

    let price_options: String = PriceBand::ALL
        .iter()
        .map(|band| render_option(band.as_str(), band.label(), filter.price_band == *band))
        .collect();

    format!(
        r#"<section class="filtros">
    <select name="categoria">
{category_options}    </select>
    <select name="preco">
{price_options}    </select>
</section>"#
    )
}

fn render_option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!("        <option value=\"{value}\"{selected}>{label}</option>\n")
}

/// Render the product grid for the filtered catalog.
pub fn render_product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<section class="produtos">
    <p class="no-results">Nenhum produto encontrado.</p>
</section>"#
            .to_string();
    }

    let cards: String = products.iter().map(render_product_card).collect();
    format!("<section class=\"produtos\">\n{cards}</section>")
}

fn render_product_card(product: &Product) -> String {
    format!(
        r#"    <div class="card" data-product-id="{id}">
        <img src="{image}" alt="{name}">
        <div class="card-content">
            <h2>{name}</h2>
            <p>{description}</p>
            <p class="preco">{price}</p>
            <button class="btn-comprar" data-product-id="{id}">Adicionar ao Carrinho</button>
        </div>
    </div>
"#,
        id = product.id,
        image = html_escape(&product.image_url),
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        price = product.price.display(),
    )
}

/// Render the cart panel: entries, total, finalize trigger and status.
pub fn render_cart(cart: &Cart, status: &CheckoutStatus) -> String {
    let entries = if cart.is_empty() {
        "    <p>Seu carrinho está vazio.</p>\n".to_string()
    } else {
        let items: String = cart
            .iter()
            .enumerate()
            .map(|(index, item)| render_cart_entry(index, item))
            .collect();
        format!("    <ul>\n{items}    </ul>\n")
    };

    let disabled = if status.loading { " disabled" } else { "" };
    let button_label = if status.loading {
        "Processando..."
    } else {
        "Finalizar Compra"
    };
    let message = if status.message.is_empty() {
        String::new()
    } else {
        format!(
            "        <p class=\"mensagem\">{}</p>\n",
            html_escape(&status.message)
        )
    };

    format!(
        r#"<aside class="carrinho">
    <h2>Carrinho</h2>
{entries}    <div class="total">
        <p>Total: {total}</p>
        <button class="btn-finalizar"{disabled}>{button_label}</button>
{message}    </div>
</aside>"#,
        total = cart.total().display(),
    )
}

fn render_cart_entry(index: usize, item: &Product) -> String {
    format!(
        r#"        <li data-index="{index}">
            <div>
                <p>{name}</p>
                <span>{price}</span>
            </div>
            <button class="btn-remover" data-index="{index}">Remover</button>
        </li>
"#,
        name = html_escape(&item.name),
        price = item.price.display(),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
