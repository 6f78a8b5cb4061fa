//! Venue repository for database operations.

use domain::models::venue::{CreateVenueRequest, UpdateVenueRequest, VenueQuery};
use shared::search::like_pattern;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::VenueEntity;
use crate::metrics::QueryTimer;

const COLUMNS: &str = "id, name, address1, address2, city, state, postal_code, contact_name, \
                       contact_email, contact_phone, latitude, longitude, supported_event_types, \
                       is_active, notes, created_at, updated_at";

/// Repository for venue-related database operations.
#[derive(Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    /// Creates a new VenueRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new venue.
    pub async fn create(&self, request: &CreateVenueRequest) -> Result<VenueEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_venue");
        let result = sqlx::query_as::<_, VenueEntity>(&format!(
            r#"
            INSERT INTO venues (name, address1, address2, city, state, postal_code,
                                contact_name, contact_email, contact_phone,
                                latitude, longitude, supported_event_types, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    COALESCE($12, ARRAY[]::text[]), COALESCE($13, TRUE), $14)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.address1)
        .bind(&request.address2)
        .bind(&request.city)
        .bind(&request.state)
        .bind(&request.postal_code)
        .bind(&request.contact_name)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.supported_event_types)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a venue by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VenueEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_venue_by_id");
        let result = sqlx::query_as::<_, VenueEntity>(&format!(
            "SELECT {COLUMNS} FROM venues WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List venues, optionally filtered by search term and active flag.
    ///
    /// When the query carries a complete lat/lng/radius triple the result is
    /// restricted to venues within the radius, nearest first. Venues without
    /// coordinates never match a radius search.
    pub async fn list(&self, query: &VenueQuery) -> Result<Vec<VenueEntity>, sqlx::Error> {
        if let Some((lat, lng, radius_km)) = query.radius_filter() {
            return self.find_near(query, lat, lng, radius_km).await;
        }

        let timer = QueryTimer::new("list_venues");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, VenueEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM venues
            WHERE ($1::text IS NULL OR name ILIKE $1 OR city ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
            ORDER BY name
            "#,
        ))
        .bind(pattern)
        .bind(query.active)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Venues within `radius_km` of a point, nearest first (haversine).
    async fn find_near(
        &self,
        query: &VenueQuery,
        lat: f64,
        lng: f64,
        radius_km: f64,
    ) -> Result<Vec<VenueEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_venues_near");
        let pattern = query.search.as_deref().and_then(like_pattern);
        let result = sqlx::query_as::<_, VenueEntity>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM (
                SELECT *,
                       6371.0 * acos(LEAST(1.0,
                           cos(radians($1)) * cos(radians(latitude))
                           * cos(radians(longitude) - radians($2))
                           + sin(radians($1)) * sin(radians(latitude))
                       )) AS distance_km
                FROM venues
                WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            ) located
            WHERE distance_km <= $3
              AND ($4::text IS NULL OR name ILIKE $4 OR city ILIKE $4)
              AND ($5::boolean IS NULL OR is_active = $5)
            ORDER BY distance_km
            "#,
        ))
        .bind(lat)
        .bind(lng)
        .bind(radius_km)
        .bind(pattern)
        .bind(query.active)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a venue. Returns None when the ID does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVenueRequest,
    ) -> Result<Option<VenueEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_venue");
        let result = sqlx::query_as::<_, VenueEntity>(&format!(
            r#"
            UPDATE venues SET
                name = COALESCE($2, name),
                address1 = COALESCE($3, address1),
                address2 = COALESCE($4, address2),
                city = COALESCE($5, city),
                state = COALESCE($6, state),
                postal_code = COALESCE($7, postal_code),
                contact_name = COALESCE($8, contact_name),
                contact_email = COALESCE($9, contact_email),
                contact_phone = COALESCE($10, contact_phone),
                latitude = COALESCE($11, latitude),
                longitude = COALESCE($12, longitude),
                supported_event_types = COALESCE($13, supported_event_types),
                is_active = COALESCE($14, is_active),
                notes = COALESCE($15, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&request.name)
        .bind(&request.address1)
        .bind(&request.address2)
        .bind(&request.city)
        .bind(&request.state)
        .bind(&request.postal_code)
        .bind(&request.contact_name)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.supported_event_types)
        .bind(request.is_active)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a venue. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_venue");
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
