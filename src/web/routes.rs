// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        class_handlers, class_schedule_handlers, gf_handlers, instance_class_handlers,
        leader_handlers, ong_handlers, professor_class_handlers, professor_handlers,
        responsable_handlers, student_class_handlers, student_handlers,
        student_presence_handlers, user_handlers,
    },
};
use axum::{routing::get, Router};

pub fn create_router(app_state: AppState) -> Router {
    // --- Pessoas e organização ---
    let people_routes = Router::new()
        .route("/ongs", get(ong_handlers::list_ongs).post(ong_handlers::create_ong))
        .route(
            "/ongs/{id}",
            get(ong_handlers::get_ong)
                .put(ong_handlers::update_ong)
                .delete(ong_handlers::delete_ong),
        )
        .route("/users", get(user_handlers::list_users).post(user_handlers::create_user))
        .route(
            "/users/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        )
        .route("/gfs", get(gf_handlers::list_gfs).post(gf_handlers::create_gf))
        .route(
            "/gfs/{id}",
            get(gf_handlers::get_gf)
                .put(gf_handlers::update_gf)
                .delete(gf_handlers::delete_gf),
        )
        .route(
            "/leaders",
            get(leader_handlers::list_leaders).post(leader_handlers::create_leader),
        )
        .route(
            "/leaders/{id}",
            get(leader_handlers::get_leader)
                .put(leader_handlers::update_leader)
                .delete(leader_handlers::delete_leader),
        )
        // Singular, como no frontend existente
        .route("/leader/{id}/ong", get(leader_handlers::get_leader_ong))
        .route(
            "/professors",
            get(professor_handlers::list_professors).post(professor_handlers::create_professor),
        )
        .route(
            "/professors/{id}",
            get(professor_handlers::get_professor)
                .put(professor_handlers::update_professor)
                .delete(professor_handlers::delete_professor),
        )
        .route(
            "/responsables",
            get(responsable_handlers::list_responsables)
                .post(responsable_handlers::create_responsable),
        )
        .route(
            "/responsables/{id}",
            get(responsable_handlers::get_responsable)
                .put(responsable_handlers::update_responsable)
                .delete(responsable_handlers::delete_responsable),
        )
        .route(
            "/students",
            get(student_handlers::list_students).post(student_handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(student_handlers::get_student)
                .put(student_handlers::update_student)
                .delete(student_handlers::delete_student),
        );

    // --- Turmas, matrículas, horários e presenças ---
    let class_routes = Router::new()
        .route("/classes", get(class_handlers::list_classes).post(class_handlers::create_class))
        .route(
            "/classes/{id}",
            get(class_handlers::get_class)
                .put(class_handlers::update_class)
                .delete(class_handlers::delete_class),
        )
        .route(
            "/student-classes",
            get(student_class_handlers::list_student_classes)
                .post(student_class_handlers::create_student_class),
        )
        .route(
            "/student-classes/{id}",
            get(student_class_handlers::get_student_class)
                .put(student_class_handlers::update_student_class)
                .delete(student_class_handlers::delete_student_class),
        )
        .route(
            "/students-classes/students/{class_id}",
            get(student_class_handlers::list_students_for_class),
        )
        .route(
            "/class-schedules",
            get(class_schedule_handlers::list_class_schedules)
                .post(class_schedule_handlers::create_class_schedule),
        )
        .route(
            "/class-schedules/{id}",
            get(class_schedule_handlers::get_class_schedule)
                .put(class_schedule_handlers::update_class_schedule)
                .delete(class_schedule_handlers::delete_class_schedule),
        )
        .route(
            "/instance-classes",
            get(instance_class_handlers::list_instance_classes)
                .post(instance_class_handlers::create_instance_class),
        )
        .route(
            "/instance-classes/{id}",
            get(instance_class_handlers::get_instance_class)
                .put(instance_class_handlers::update_instance_class)
                .delete(instance_class_handlers::delete_instance_class),
        )
        .route(
            "/instance-classes/{id}/professors",
            get(professor_class_handlers::list_professors_for_instance)
                .post(professor_class_handlers::add_professor_to_instance),
        )
        .route(
            "/professors-instance",
            get(professor_class_handlers::list_professor_classes)
                .post(professor_class_handlers::create_professor_class),
        )
        .route(
            "/professors-instance/{id}",
            get(professor_class_handlers::get_professor_class)
                .put(professor_class_handlers::update_professor_class)
                .delete(professor_class_handlers::delete_professor_class),
        )
        .route(
            "/students-presences-classes",
            get(student_presence_handlers::list_presences)
                .post(student_presence_handlers::create_presence),
        )
        .route(
            "/students-presences-classes/{id}",
            get(student_presence_handlers::get_presence)
                .put(student_presence_handlers::update_presence)
                .delete(student_presence_handlers::delete_presence),
        );

    // --- Router Final ---
    Router::new()
        .route("/", get(|| async { "Index Route :)" }))
        .nest("/api", people_routes.merge(class_routes))
        .with_state(app_state)
}
