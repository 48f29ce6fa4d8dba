//! 팀 스킬 요구사항 달성도 집계
//!
//! 팀 요구사항 행과 팀 멤버의 현재 스킬 레벨을 받아 스킬별 달성도를 계산한다.
//! DB 조회는 [`super::service`]가 담당하고, 여기서는 순수 계산만 한다.

use std::collections::{BTreeMap, HashMap, HashSet};

/// 팀 요구사항 한 행
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementRow {
    pub skill_id: i64,
    pub desired_level: i32,
    pub desired_members: Option<i32>,
}

/// 멤버 한 명의 스킬 현재 레벨
#[derive(Debug, Clone, PartialEq)]
pub struct MemberLevel {
    pub member_id: i64,
    pub skill_id: i64,
    pub current_level: Option<i32>,
}

/// 요구사항 행별 집계 결과
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementTally {
    pub desired_level: i32,
    pub desired_members: Option<i32>,
    pub matched_members: i64,
    pub progress: i32,
}

/// 스킬별 집계 결과
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTally {
    pub skill_id: i64,
    /// desired_level 오름차순
    pub requirements: Vec<RequirementTally>,
    /// desired_members가 가장 큰 행의 달성도
    pub progress: i32,
}

/// 달성률(%)을 0..=100 정수로 계산한다. 목표 인원이 0 이하이거나 없으면 0.
pub fn progress_percent(matched_members: i64, desired_members: Option<i32>) -> i32 {
    match desired_members {
        Some(desired) if desired > 0 => {
            let ratio = matched_members as f64 / f64::from(desired) * 100.0;
            ratio.round().clamp(0.0, 100.0) as i32
        }
        _ => 0,
    }
}

/// 요구사항 행마다 현재 레벨이 정확히 desired_level인 팀 멤버 수를 센다.
///
/// 더 높은 레벨을 가진 멤버는 세지 않는다 (누적 아님).
/// `members`에 없는 멤버의 레벨 행은 무시한다.
pub fn count_matches(
    requirements: &[RequirementRow],
    members: &HashSet<i64>,
    levels: &[MemberLevel],
) -> Vec<i64> {
    let mut holders: HashMap<(i64, i32), HashSet<i64>> = HashMap::new();
    for level in levels {
        if !members.contains(&level.member_id) {
            continue;
        }
        if let Some(current) = level.current_level {
            holders
                .entry((level.skill_id, current))
                .or_default()
                .insert(level.member_id);
        }
    }

    requirements
        .iter()
        .map(|req| {
            holders
                .get(&(req.skill_id, req.desired_level))
                .map_or(0, |set| set.len() as i64)
        })
        .collect()
}

/// 요구사항을 스킬별로 묶고 스킬마다 대표 달성도를 계산한다.
///
/// 대표 행은 desired_members(없으면 0)가 가장 큰 행이며,
/// 동률이면 desired_level이 가장 낮은 행을 택한다.
/// 결과는 skill_id 오름차순이다.
pub fn aggregate(
    requirements: &[RequirementRow],
    members: &HashSet<i64>,
    levels: &[MemberLevel],
) -> Vec<SkillTally> {
    let matches = count_matches(requirements, members, levels);

    let mut by_skill: BTreeMap<i64, Vec<RequirementTally>> = BTreeMap::new();
    for (req, matched) in requirements.iter().zip(matches) {
        by_skill
            .entry(req.skill_id)
            .or_default()
            .push(RequirementTally {
                desired_level: req.desired_level,
                desired_members: req.desired_members,
                matched_members: matched,
                progress: progress_percent(matched, req.desired_members),
            });
    }

    by_skill
        .into_iter()
        .map(|(skill_id, mut rows)| {
            rows.sort_by_key(|r| r.desired_level);
            let progress = top_requirement(&rows).map_or(0, |r| r.progress);
            SkillTally {
                skill_id,
                requirements: rows,
                progress,
            }
        })
        .collect()
}

fn top_requirement(rows: &[RequirementTally]) -> Option<&RequirementTally> {
    rows.iter().max_by(|a, b| {
        a.desired_members
            .unwrap_or(0)
            .cmp(&b.desired_members.unwrap_or(0))
            .then_with(|| b.desired_level.cmp(&a.desired_level))
    })
}
