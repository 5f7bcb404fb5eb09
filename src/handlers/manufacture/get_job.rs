use sqlx::PgPool;

use crate::api::dto::ManufactureJobDto;
use crate::commands::GetManufactureJobCommand;
use crate::database::models::{JobWithProduct, ManufactureStatusEntry, MaterialWithProduct};
use crate::error::ApiError;

/// Load a manufacture job with its product, full status history and material
/// line items (each with its own product), mapped to a flat DTO
pub async fn get_job(
    pool: &PgPool,
    cmd: GetManufactureJobCommand,
) -> Result<ManufactureJobDto, ApiError> {
    let job = sqlx::query_as::<_, JobWithProduct>(
        "SELECT m.manufacture_id, p.product_id, p.name AS product_name, p.unit AS product_unit \
         FROM manufacture_jobs m \
         JOIN products p ON p.product_id = m.product_id \
         WHERE m.manufacture_id = $1",
    )
    .bind(cmd.manufacture_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| ApiError::not_found("Manufacture job not found"))?;

    let history = sqlx::query_as::<_, ManufactureStatusEntry>(
        "SELECT status, date FROM manufacture_status_history \
         WHERE manufacture_id = $1 ORDER BY date",
    )
    .bind(cmd.manufacture_id)
    .fetch_all(pool)
    .await?;

    let materials = sqlx::query_as::<_, MaterialWithProduct>(
        "SELECT mm.material_id, mm.quantity, \
                p.product_id, p.name AS product_name, p.unit AS product_unit \
         FROM manufacture_materials mm \
         JOIN products p ON p.product_id = mm.product_id \
         WHERE mm.manufacture_id = $1 \
         ORDER BY mm.material_id",
    )
    .bind(cmd.manufacture_id)
    .fetch_all(pool)
    .await?;

    tracing::info!("Found manufacture job {}", job.manufacture_id);
    Ok(ManufactureJobDto::from_rows(&job, &history, &materials))
}
