/// Equality filters plus an optional ordering, the only select shape the relay needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub filters: Vec<(String, String)>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub descending: bool,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order_by = Some(OrderBy { column: column.to_string(), descending: true });
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order_by = Some(OrderBy { column: column.to_string(), descending: false });
        self
    }

    /// Query-string pairs in PostgREST syntax; values are encoded by the HTTP client.
    pub fn to_postgrest_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];

        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{}", value)));
        }

        if let Some(order) = &self.order_by {
            let direction = if order.descending { "desc" } else { "asc" };
            params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
        }

        params
    }
}
