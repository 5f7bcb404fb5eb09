use sqlx::PgPool;

use crate::api::dto::SimpleOrderDto;
use crate::commands::GetOrdersCommand;
use crate::database::models::OrderSummaryRow;
use crate::error::ApiError;

/// List order summaries newest first, each with its most recent status entry
pub async fn get_orders(
    pool: &PgPool,
    cmd: GetOrdersCommand,
) -> Result<Vec<SimpleOrderDto>, ApiError> {
    let (limit, offset) = crate::handlers::paging(cmd.page, cmd.page_size);

    let rows = sqlx::query_as::<_, OrderSummaryRow>(
        "SELECT o.order_id, o.order_type, o.total_weight, o.total_sales, o.total_shipping, \
                o.total_tax, o.sub_total, o.user_fullname, o.supplier_name, \
                s.status AS last_status, s.date AS last_status_date, o.modified_date \
         FROM orders o \
         LEFT JOIN LATERAL ( \
             SELECT status, date FROM order_status_history h \
             WHERE h.order_id = o.order_id \
             ORDER BY date DESC LIMIT 1 \
         ) s ON TRUE \
         ORDER BY o.modified_date DESC, o.order_id DESC \
         LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    rows.iter().map(SimpleOrderDto::from_row).collect()
}
