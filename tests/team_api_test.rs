//! 팀 / 요구사항 API 테스트
//!
//! 테스트 대상:
//! - POST/GET/PATCH/DELETE /api/v1/teams
//! - POST/DELETE /api/v1/teams/{team_id}/members
//! - GET/PUT/DELETE /api/v1/teams/{team_id}/requirements

mod common;

use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use common::*;
use skillboard::domain::team::entity::{member_team, team_skill_requirement};

// ============== 팀 생성 / 조회 ==============

mod create_and_read {
    use super::*;

    #[tokio::test]
    async fn should_create_team_with_owner_membership() {
        // Arrange
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let token = bearer(owner);

        // Act
        let response = send(
            router(&state),
            json_request(
                "POST",
                "/api/v1/teams",
                Some(&token),
                json!({ "name": "플랫폼팀", "description": "인프라 담당" }),
            ),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["result"]["name"], "플랫폼팀");
        assert_eq!(body["result"]["ownerId"], owner);

        let team_id = body["result"]["teamId"].as_i64().unwrap();
        let memberships = member_team::Entity::find()
            .filter(member_team::Column::TeamId.eq(team_id))
            .count(&state.db)
            .await
            .unwrap();
        assert_eq!(memberships, 1);
    }

    #[tokio::test]
    async fn should_return_400_when_name_is_empty() {
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request("POST", "/api/v1/teams", Some(&token), json!({ "name": "" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_return_400_envelope_for_malformed_json() {
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request("POST", "/api/v1/teams", Some(&token), json!({ "title": 1 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(response).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_return_401_without_token() {
        let state = setup_state().await;

        let response = send(
            router(&state),
            json_request("POST", "/api/v1/teams", None, json!({ "name": "팀" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_list_only_my_teams_with_role() {
        // Arrange
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let other = seed_member(db, "other").await;
        let mine = seed_team(db, owner, "mine").await;
        let joined = seed_team(db, other, "joined").await;
        join_team(db, owner, joined).await;
        seed_team(db, other, "not-mine").await;
        let token = bearer(owner);

        // Act
        let response = send(
            router(&state),
            empty_request("GET", "/api/v1/teams", Some(&token)),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        let teams = body["result"].as_array().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0]["teamId"], mine);
        assert_eq!(teams[0]["role"], "OWNER");
        assert_eq!(teams[1]["teamId"], joined);
        assert_eq!(teams[1]["role"], "MEMBER");
    }

    #[tokio::test]
    async fn should_return_detail_with_owner_first() {
        // Arrange
        let state = setup_state().await;
        let db = &state.db;
        let early = seed_member(db, "early").await;
        let owner = seed_member(db, "owner").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, early, team_id).await;
        let token = bearer(early);

        // Act
        let response = send(
            router(&state),
            empty_request("GET", &format!("/api/v1/teams/{}", team_id), Some(&token)),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        let members = body["result"]["members"].as_array().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0]["memberId"], owner);
        assert_eq!(members[0]["role"], "OWNER");
        assert_eq!(members[1]["memberId"], early);
        assert_eq!(members[1]["role"], "MEMBER");
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_team() {
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            empty_request("GET", "/api/v1/teams/404", Some(&token)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "TEAM4041");
    }
}

// ============== 팀 수정 / 삭제 ==============

mod update_and_delete {
    use super::*;

    #[tokio::test]
    async fn should_update_name_only_for_owner() {
        // Arrange
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let team_id = seed_team(db, owner, "before").await;
        let token = bearer(owner);

        // Act
        let response = send(
            router(&state),
            json_request(
                "PATCH",
                &format!("/api/v1/teams/{}", team_id),
                Some(&token),
                json!({ "name": "after" }),
            ),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        assert_eq!(body["result"]["name"], "after");
    }

    #[tokio::test]
    async fn should_return_403_when_non_owner_updates() {
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let member = seed_member(db, "member").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, member, team_id).await;
        let token = bearer(member);

        let response = send(
            router(&state),
            json_request(
                "PATCH",
                &format!("/api/v1/teams/{}", team_id),
                Some(&token),
                json!({ "name": "hijack" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "TEAM4031");
    }

    #[tokio::test]
    async fn should_delete_team_with_memberships_and_requirements() {
        // Arrange
        let state = setup_state().await;
        let db = &state.db;
        seed_levels(db).await;
        let owner = seed_member(db, "owner").await;
        let member = seed_member(db, "member").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, member, team_id).await;
        let rust = seed_skill(db, "Rust", None).await;
        seed_requirement(db, team_id, rust, 3, Some(2)).await;
        let token = bearer(owner);

        // Act
        let response = send(
            router(&state),
            empty_request("DELETE", &format!("/api/v1/teams/{}", team_id), Some(&token)),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let memberships = member_team::Entity::find()
            .filter(member_team::Column::TeamId.eq(team_id))
            .count(db)
            .await
            .unwrap();
        let requirements = team_skill_requirement::Entity::find()
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .count(db)
            .await
            .unwrap();
        assert_eq!(memberships, 0);
        assert_eq!(requirements, 0);
    }
}

// ============== 팀 멤버 ==============

mod members {
    use super::*;

    #[tokio::test]
    async fn should_add_member() {
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let newbie = seed_member(db, "newbie").await;
        let team_id = seed_team(db, owner, "platform").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request(
                "POST",
                &format!("/api/v1/teams/{}/members", team_id),
                Some(&token),
                json!({ "memberId": newbie }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        assert_eq!(body["result"]["memberId"], newbie);
        assert_eq!(body["result"]["role"], "MEMBER");
    }

    #[tokio::test]
    async fn should_return_409_when_member_already_joined() {
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let member = seed_member(db, "member").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, member, team_id).await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request(
                "POST",
                &format!("/api/v1/teams/{}/members", team_id),
                Some(&token),
                json!({ "memberId": member }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "COMMON409");
    }

    #[tokio::test]
    async fn should_return_404_when_adding_unknown_member() {
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let team_id = seed_team(&state.db, owner, "platform").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request(
                "POST",
                &format!("/api/v1/teams/{}/members", team_id),
                Some(&token),
                json!({ "memberId": 999 }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "MEMBER4041");
    }

    #[tokio::test]
    async fn should_not_remove_owner() {
        let state = setup_state().await;
        let owner = seed_member(&state.db, "owner").await;
        let team_id = seed_team(&state.db, owner, "platform").await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            empty_request(
                "DELETE",
                &format!("/api/v1/teams/{}/members/{}", team_id, owner),
                Some(&token),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_remove_member() {
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let member = seed_member(db, "member").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, member, team_id).await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            empty_request(
                "DELETE",
                &format!("/api/v1/teams/{}/members/{}", team_id, member),
                Some(&token),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let remaining = member_team::Entity::find()
            .filter(member_team::Column::TeamId.eq(team_id))
            .count(db)
            .await
            .unwrap();
        assert_eq!(remaining, 1);
    }
}

// ============== 스킬 요구사항 ==============

mod requirements {
    use super::*;

    #[tokio::test]
    async fn should_upsert_requirement_by_skill_and_level() {
        // Arrange
        let state = setup_state().await;
        let db = &state.db;
        seed_levels(db).await;
        let owner = seed_member(db, "owner").await;
        let team_id = seed_team(db, owner, "platform").await;
        let rust = seed_skill(db, "Rust", None).await;
        let token = bearer(owner);
        let uri = format!("/api/v1/teams/{}/requirements", team_id);

        // Act
        let first = send(
            router(&state),
            json_request(
                "PUT",
                &uri,
                Some(&token),
                json!({ "skillId": rust, "desiredLevel": 3, "desiredMembers": 2 }),
            ),
        )
        .await;
        let second = send(
            router(&state),
            json_request(
                "PUT",
                &uri,
                Some(&token),
                json!({ "skillId": rust, "desiredLevel": 3, "desiredMembers": 5 }),
            ),
        )
        .await;

        // Assert
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);

        let list = send(router(&state), empty_request("GET", &uri, Some(&token))).await;
        let body = parse_body(list).await;
        let rows = body["result"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["desiredMembers"], 5);
        assert_eq!(rows[0]["skillName"], "Rust");
    }

    #[tokio::test]
    async fn should_return_404_for_undefined_level() {
        let state = setup_state().await;
        let db = &state.db;
        let owner = seed_member(db, "owner").await;
        let team_id = seed_team(db, owner, "platform").await;
        let rust = seed_skill(db, "Rust", None).await;
        let token = bearer(owner);

        let response = send(
            router(&state),
            json_request(
                "PUT",
                &format!("/api/v1/teams/{}/requirements", team_id),
                Some(&token),
                json!({ "skillId": rust, "desiredLevel": 9, "desiredMembers": 1 }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_body(response).await;
        assert_eq!(body["code"], "LEVEL4041");
    }

    #[tokio::test]
    async fn should_return_403_when_non_owner_sets_requirement() {
        let state = setup_state().await;
        let db = &state.db;
        seed_levels(db).await;
        let owner = seed_member(db, "owner").await;
        let member = seed_member(db, "member").await;
        let team_id = seed_team(db, owner, "platform").await;
        join_team(db, member, team_id).await;
        let rust = seed_skill(db, "Rust", None).await;
        let token = bearer(member);

        let response = send(
            router(&state),
            json_request(
                "PUT",
                &format!("/api/v1/teams/{}/requirements", team_id),
                Some(&token),
                json!({ "skillId": rust, "desiredLevel": 2, "desiredMembers": 1 }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_delete_requirement_and_404_on_second_delete() {
        let state = setup_state().await;
        let db = &state.db;
        seed_levels(db).await;
        let owner = seed_member(db, "owner").await;
        let team_id = seed_team(db, owner, "platform").await;
        let rust = seed_skill(db, "Rust", None).await;
        let requirement_id = seed_requirement(db, team_id, rust, 2, Some(1)).await;
        let token = bearer(owner);
        let uri = format!("/api/v1/teams/{}/requirements/{}", team_id, requirement_id);

        let first = send(router(&state), empty_request("DELETE", &uri, Some(&token))).await;
        let second = send(router(&state), empty_request("DELETE", &uri, Some(&token))).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        let body = parse_body(second).await;
        assert_eq!(body["code"], "REQUIREMENT4041");
    }
}
