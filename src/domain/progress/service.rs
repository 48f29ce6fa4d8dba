use std::collections::{BTreeSet, HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};
use tracing::{debug, warn};

use super::aggregator::{self, MemberLevel, RequirementRow};
use super::dto::SkillProgressItem;
use crate::domain::skill::entity::{member_skill, skill};
use crate::domain::team::entity::{member_team, team_skill_requirement};
use crate::utils::error::AppError;

pub struct ProgressService;

impl ProgressService {
    /// 팀 스킬 요구사항 달성 현황
    ///
    /// 팀이 없거나 요구사항이 없으면 빈 목록을 반환한다.
    /// 캐시 없이 호출마다 멤버십, 요구사항, 스킬 레벨을 새로 읽는다.
    pub async fn team_skill_progress<C>(
        db: &C,
        team_id: i64,
    ) -> Result<Vec<SkillProgressItem>, AppError>
    where
        C: ConnectionTrait,
    {
        // 1. 요구사항 조회
        let requirements: Vec<RequirementRow> = team_skill_requirement::Entity::find()
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .all(db)
            .await?
            .into_iter()
            .map(|r| RequirementRow {
                skill_id: r.skill_id,
                desired_level: r.desired_level,
                desired_members: r.desired_members,
            })
            .collect();

        if requirements.is_empty() {
            debug!(team_id = team_id, "no skill requirements for team");
            return Ok(Vec::new());
        }

        // 2. 팀 멤버 조회
        let members: HashSet<i64> = member_team::Entity::find()
            .select_only()
            .column(member_team::Column::MemberId)
            .filter(member_team::Column::TeamId.eq(team_id))
            .into_tuple::<i64>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let skill_ids: BTreeSet<i64> = requirements.iter().map(|r| r.skill_id).collect();

        // 3. 멤버들의 해당 스킬 레벨 조회
        let levels: Vec<MemberLevel> = if members.is_empty() {
            Vec::new()
        } else {
            member_skill::Entity::find()
                .filter(member_skill::Column::MemberId.is_in(members.iter().copied()))
                .filter(member_skill::Column::SkillId.is_in(skill_ids.iter().copied()))
                .all(db)
                .await?
                .into_iter()
                .map(|l| MemberLevel {
                    member_id: l.member_id,
                    skill_id: l.skill_id,
                    current_level: l.current_level,
                })
                .collect()
        };

        let skills: HashMap<i64, skill::Model> = skill::Entity::find()
            .filter(skill::Column::SkillId.is_in(skill_ids.iter().copied()))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.skill_id, s))
            .collect();

        debug!(
            team_id = team_id,
            requirement_count = requirements.len(),
            member_count = members.len(),
            level_count = levels.len(),
            "aggregating team skill progress"
        );

        // 4. 집계
        let result = aggregator::aggregate(&requirements, &members, &levels)
            .into_iter()
            .filter_map(|tally| match skills.get(&tally.skill_id) {
                Some(skill) => Some(SkillProgressItem::from_tally(tally, skill)),
                None => {
                    warn!(
                        team_id = team_id,
                        skill_id = tally.skill_id,
                        "requirement references a missing skill"
                    );
                    None
                }
            })
            .collect();

        Ok(result)
    }
}
