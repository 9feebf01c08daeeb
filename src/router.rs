use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        area, attendance, auth, bacenta, call_log, member, ministry, notification, region, report,
        sync, user,
    },
    dto, state::AppState,
};

/// Uploaded photos may not exceed 5 MiB.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        region::create_region,
        region::get_regions,
        region::get_region_by_id,
        region::update_region,
        region::delete_region,
        area::create_area,
        area::get_areas,
        area::get_area_by_id,
        area::update_area,
        area::delete_area,
        member::create_member,
        member::get_members,
        member::get_member_by_id,
        member::update_member,
        member::update_member_state,
        member::delete_member,
        member::bulk_transfer_members,
        bacenta::create_meeting,
        bacenta::get_meetings,
        bacenta::get_meeting_detail,
        bacenta::add_meeting_attendance,
        bacenta::add_meeting_offering,
        ministry::create_ministry,
        ministry::get_ministries,
        ministry::get_ministry_by_id,
        ministry::add_ministry_member,
        ministry::remove_ministry_member,
        ministry::get_ministry_roster,
        ministry::record_ministry_attendance,
        ministry::get_ministry_attendance,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::region::RegionDto,
        dto::region::CreateRegionDto,
        dto::region::UpdateRegionDto,
        dto::area::AreaDto,
        dto::area::CreateAreaDto,
        dto::area::UpdateAreaDto,
        dto::member::MemberDto,
        dto::member::PaginatedMembersDto,
        dto::member::CreateMemberDto,
        dto::member::UpdateMemberDto,
        dto::member::UpdateMemberStateDto,
        dto::member::BulkTransferDto,
        dto::member::BulkTransferResultDto,
        dto::bacenta::BacentaMeetingDto,
        dto::bacenta::BacentaMeetingDetailDto,
        dto::bacenta::BacentaAttendanceDto,
        dto::bacenta::BacentaOfferingDto,
        dto::bacenta::CreateMeetingDto,
        dto::bacenta::AddBacentaAttendanceDto,
        dto::bacenta::AddOfferingDto,
        dto::ministry::MinistryDto,
        dto::ministry::CreateMinistryDto,
        dto::ministry::AddMinistryMemberDto,
        dto::ministry::MinistryAttendanceDto,
        dto::ministry::RecordMinistryAttendanceDto,
    )),
    tags(
        (name = region::REGION_TAG, description = "Region management"),
        (name = area::AREA_TAG, description = "Area management"),
        (name = member::MEMBER_TAG, description = "Member management"),
        (name = bacenta::BACENTA_TAG, description = "Bacenta meeting reporting"),
        (name = ministry::MINISTRY_TAG, description = "Ministry rosters and attendance"),
    )
)]
struct ApiDoc;

/// Builds the full application router: API routes, the OpenAPI explorer and
/// static serving of uploaded photos.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_current_user))
        .route("/api/auth/password", put(auth::change_password))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id).put(user::update_user),
        )
        .route("/api/users/{id}/photo", post(user::upload_user_photo))
        .route("/api/regions", post(region::create_region).get(region::get_regions))
        .route(
            "/api/regions/{id}",
            get(region::get_region_by_id)
                .put(region::update_region)
                .delete(region::delete_region),
        )
        .route("/api/areas", post(area::create_area).get(area::get_areas))
        .route(
            "/api/areas/{id}",
            get(area::get_area_by_id)
                .put(area::update_area)
                .delete(area::delete_area),
        )
        .route(
            "/api/members",
            post(member::create_member).get(member::get_members),
        )
        .route(
            "/api/members/{id}",
            get(member::get_member_by_id)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route("/api/members/{id}/state", put(member::update_member_state))
        .route("/api/members/{id}/photo", post(member::upload_member_photo))
        .route(
            "/api/members/bulk-transfer",
            post(member::bulk_transfer_members),
        )
        .route(
            "/api/members/{id}/calls",
            post(call_log::log_call).get(call_log::get_member_calls),
        )
        .route(
            "/api/attendance",
            post(attendance::record_attendance).get(attendance::get_attendance),
        )
        .route(
            "/api/attendance/bulk",
            post(attendance::record_bulk_attendance),
        )
        .route(
            "/api/bacenta/meetings",
            post(bacenta::create_meeting).get(bacenta::get_meetings),
        )
        .route(
            "/api/bacenta/meetings/{id}",
            get(bacenta::get_meeting_detail),
        )
        .route(
            "/api/bacenta/meetings/{id}/attendance",
            post(bacenta::add_meeting_attendance),
        )
        .route(
            "/api/bacenta/meetings/{id}/offerings",
            post(bacenta::add_meeting_offering),
        )
        .route(
            "/api/ministries",
            post(ministry::create_ministry).get(ministry::get_ministries),
        )
        .route("/api/ministries/{id}", get(ministry::get_ministry_by_id))
        .route(
            "/api/ministries/{id}/members",
            post(ministry::add_ministry_member).get(ministry::get_ministry_roster),
        )
        .route(
            "/api/ministries/{id}/members/{member_id}",
            delete(ministry::remove_ministry_member),
        )
        .route(
            "/api/ministries/{id}/attendance",
            post(ministry::record_ministry_attendance).get(ministry::get_ministry_attendance),
        )
        .route(
            "/api/notifications",
            post(notification::send_notification).get(notification::get_notifications),
        )
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .route("/api/reports/attendance", get(report::attendance_report))
        .route("/api/reports/offerings", get(report::offerings_report))
        .route("/api/reports/members", get(report::membership_report))
        .route("/api/sync", post(sync::run_sync))
        .route("/api/sync/logs", get(sync::get_sync_logs))
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
