//! Server-side HTML for the single listing page.
//!
//! The rendered contract is small: the menu (name and price), the stored
//! orders (name, total and items) and a form posting `name`, `phone` and
//! `orderedItems` to `/add-customer`. Everything user-supplied is escaped.

use crate::core::catalog::MenuCatalog;
use crate::domain::model::CustomerOrder;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH" crossorigin="anonymous">
    <title>Restaurant Ordering System</title>
    <style>
        body { font-family: Arial, sans-serif; background-color: #E5E5E5; margin: 0; padding: 0; }
        .container { max-width: 800px; margin: 40px auto; padding: 30px; background: white; box-shadow: 0 2px 10px rgba(0,0,0,0.1); border-radius: 8px; }
        h1, h2 { color: #333; text-align: center; margin: 20px 0; }
        .customer-details { display: none; }
        .menu-card { position: fixed; bottom: 40px; right: 30px; width: 200px; padding: 10px; background: #fff; box-shadow: 0 2px 5px rgba(0,0,0,0.3); border-radius: 8px; text-align: center; }
        .menu-card h2 { font-size: 1em; margin: 0; color: #fff; background: grey; }
        .menu-card ul { padding: 0; margin: 10px 0; list-style: none; }
    </style>
    <script>
        function toggleCustomerDetails() {
            var details = document.getElementById("customerDetails");
            details.style.display = (details.style.display === "none" || details.style.display === "") ? "block" : "none";
        }
    </script>
</head>
"#;

const ORDER_FORM: &str = r#"        <form action="/add-customer" method="POST" class="mt-4">
            <label>Name</label>
            <input type="text" class="form-control" name="name" required>
            <label>Phone</label>
            <input type="text" class="form-control" name="phone" required>
            <label>Order Items (comma-separated)</label>
            <input type="text" class="form-control" name="orderedItems" required>
            <div class="text-center"><button type="submit" class="btn btn-success mt-3">Place Order</button></div>
        </form>
"#;

pub fn render_page(catalog: &MenuCatalog, orders: &[CustomerOrder], year: i32) -> String {
    let mut html = String::with_capacity(4096 + orders.len() * 256);
    html.push_str(HEAD);
    html.push_str("<body>\n    <div class=\"container\">\n");
    html.push_str("        <h1>Welcome to the Restaurant Management System!</h1>\n");
    html.push_str("        <div class=\"text-center\">\n");
    html.push_str("            <button class=\"btn btn-primary\" onclick=\"toggleCustomerDetails()\">View Customers</button>\n");
    html.push_str("        </div>\n");

    html.push_str("        <div id=\"customerDetails\" class=\"customer-details mt-4\">\n");
    html.push_str("            <h2>Customer Orders</h2>\n            <ul>\n");
    for order in orders {
        html.push_str(&render_order(order));
    }
    html.push_str("            </ul>\n        </div>\n\n");

    html.push_str(ORDER_FORM);
    html.push_str(&format!(
        "\n        <div class=\"footer mt-4 text-center\">&copy; {} Restaurant Management System</div>\n",
        year
    ));
    html.push_str("    </div>\n\n");

    html.push_str("    <div class=\"menu-card\">\n        <h2>Menu</h2>\n        <ul>\n");
    for item in catalog.items() {
        html.push_str(&format!(
            "            <li>{} - Rs {:.2}</li>\n            <hr>\n",
            escape_html(&item.name),
            item.price
        ));
    }
    html.push_str("        </ul>\n    </div>\n</body>\n</html>\n");
    html
}

fn render_order(order: &CustomerOrder) -> String {
    format!(
        concat!(
            "                <li class=\"mb-3\">\n",
            "                    <strong>Name :</strong> {} <br>\n",
            "                    <strong>Total :</strong> Rs {:.2} <br>\n",
            "                    <strong>Ordered Items:</strong> {}\n",
            "                </li>\n",
            "                <hr>\n",
        ),
        escape_html(&order.name),
        order.total_amount,
        escape_html(&order.ordered_items.join(", ")),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(name: &str, items: &[&str], total: f64) -> CustomerOrder {
        CustomerOrder {
            name: name.to_string(),
            phone: "123".to_string(),
            ordered_items: items.iter().map(|s| s.to_string()).collect(),
            total_amount: total,
        }
    }

    #[test]
    fn test_menu_prices_use_two_decimals() {
        let page = render_page(&MenuCatalog::builtin(), &[], 2024);
        assert!(page.contains("<li>Burger - Rs 50.00</li>"));
        assert!(page.contains("<li>Ice Cream - Rs 45.00</li>"));
        assert!(page.contains("&copy; 2024 Restaurant Management System"));
    }

    #[test]
    fn test_orders_list_name_total_and_items() {
        let orders = [order("Alice", &["Pizza", "Soda"], 170.0)];
        let page = render_page(&MenuCatalog::builtin(), &orders, 2024);
        assert!(page.contains("<strong>Name :</strong> Alice <br>"));
        assert!(page.contains("<strong>Total :</strong> Rs 170.00 <br>"));
        assert!(page.contains("<strong>Ordered Items:</strong> Pizza, Soda"));
    }

    #[test]
    fn test_form_fields_are_present() {
        let page = render_page(&MenuCatalog::builtin(), &[], 2024);
        assert!(page.contains(r#"action="/add-customer" method="POST""#));
        for field in ["name", "phone", "orderedItems"] {
            assert!(page.contains(&format!(r#"name="{}""#, field)));
        }
    }

    #[test]
    fn test_user_input_is_escaped() {
        let orders = [order("<script>alert(1)</script>", &["\"Soda\"", "A&B"], 0.0)];
        let page = render_page(&MenuCatalog::builtin(), &orders, 2024);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("&#34;Soda&#34;, A&amp;B"));
    }
}
