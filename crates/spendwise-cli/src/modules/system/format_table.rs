use spendwise_core::{Expense, ExpenseCategory};

const DESCRIPTION_WIDTH: usize = 48;

pub(crate) fn print_expense_table(items: &[Expense]) {
    if items.is_empty() {
        println!("No expenses found");
        return;
    }
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut amount_width = "AMOUNT".len();
    let mut category_width = "CATEGORY".len();

    for item in items {
        let id = item.id.to_string();
        let category = item.category_label().unwrap_or("-").to_string();
        id_width = id_width.max(id.len());
        amount_width = amount_width.max(item.amount.len());
        category_width = category_width.max(category.chars().count());
        rows.push((
            id,
            item.date.format("%Y-%m-%d").to_string(),
            item.amount.as_str(),
            category,
            truncate(&item.description, DESCRIPTION_WIDTH),
        ));
    }

    println!(
        "{:<id_width$}  {:<10}  {:>amount_width$}  {:<category_width$}  DESCRIPTION",
        "ID", "DATE", "AMOUNT", "CATEGORY"
    );
    for (id, date, amount, category, description) in rows {
        println!(
            "{:<id_width$}  {:<10}  {:>amount_width$}  {:<category_width$}  {}",
            id, date, amount, category, description
        );
    }
}

pub(crate) fn print_category_table(items: &[ExpenseCategory]) {
    if items.is_empty() {
        println!("No categories found");
        return;
    }
    let mut id_width = "ID".len();
    let mut name_width = "NAME".len();
    for item in items {
        id_width = id_width.max(item.id.to_string().len());
        name_width = name_width.max(item.name.chars().count());
    }

    println!("{:<id_width$}  {:<name_width$}  DESCRIPTION", "ID", "NAME");
    for item in items {
        let description = item.description.as_deref().unwrap_or("");
        println!(
            "{:<id_width$}  {:<name_width$}  {}",
            item.id,
            item.name,
            truncate(description, DESCRIPTION_WIDTH)
        );
    }
}

fn truncate(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
