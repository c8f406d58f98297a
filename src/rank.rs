//! Grouping, ranking, and rendering of skill sources.

use std::collections::HashMap;

use serde::Serialize;

use crate::skills::Skill;

/// All retained skills for one source, plus the derived peak install count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub source: String,
    pub peak_installs: i64,
    /// Skills in the order they appeared in the listing.
    pub skills: Vec<Skill>,
}

/// Filter, group, and rank skills by source.
///
/// Skills below `min_installs` are discarded. Sources keep the order in
/// which they were first encountered, then a stable sort ranks them by peak
/// installs descending, so equal peaks stay in first-encounter order. A
/// positive `max_sources` keeps only that many top-ranked groups; 0 means
/// unlimited.
pub fn rank_sources(skills: Vec<Skill>, min_installs: i64, max_sources: usize) -> Vec<SourceGroup> {
    let mut index_by_source: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<SourceGroup> = Vec::new();

    for skill in skills.into_iter().filter(|s| s.installs >= min_installs) {
        match index_by_source.get(&skill.source) {
            Some(&i) => groups[i].skills.push(skill),
            None => {
                index_by_source.insert(skill.source.clone(), groups.len());
                groups.push(SourceGroup {
                    source: skill.source.clone(),
                    peak_installs: 0,
                    skills: vec![skill],
                });
            }
        }
    }

    for group in &mut groups {
        group.peak_installs = group.skills.iter().map(|s| s.installs).max().unwrap_or(0);
    }

    groups.sort_by(|a, b| b.peak_installs.cmp(&a.peak_installs));

    if max_sources > 0 {
        groups.truncate(max_sources);
    }

    tracing::debug!("{} source group(s) after ranking", groups.len());
    groups
}

/// One source per line, bare slug.
pub fn render_slug(groups: &[SourceGroup]) -> String {
    groups.iter().map(|g| format!("{}\n", g.source)).collect()
}

/// One source per line as a GitHub URL.
pub fn render_url(groups: &[SourceGroup]) -> String {
    groups
        .iter()
        .map(|g| format!("https://github.com/{}\n", g.source))
        .collect()
}

#[derive(Serialize)]
struct SourceReport<'a> {
    source: &'a str,
    peak_installs: i64,
    skills: Vec<SkillReport<'a>>,
}

#[derive(Serialize)]
struct SkillReport<'a> {
    #[serde(rename = "skillId")]
    skill_id: &'a str,
    name: &'a str,
    installs: i64,
}

/// A single JSON array over all ranked groups, trailing newline included.
///
/// Within each group the skills are reported by installs descending; the
/// stable sort keeps listing order between equal counts.
pub fn render_json(groups: &[SourceGroup]) -> String {
    let reports: Vec<SourceReport> = groups
        .iter()
        .map(|group| {
            let mut ranked: Vec<&Skill> = group.skills.iter().collect();
            ranked.sort_by(|a, b| b.installs.cmp(&a.installs));
            SourceReport {
                source: &group.source,
                peak_installs: group.peak_installs,
                skills: ranked
                    .into_iter()
                    .map(|s| SkillReport {
                        skill_id: &s.skill_id,
                        name: &s.name,
                        installs: s.installs,
                    })
                    .collect(),
            }
        })
        .collect();

    let mut out = serde_json::to_string(&reports).expect("report serialization cannot fail");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn skill(source: &str, skill_id: &str, installs: i64) -> Skill {
        Skill {
            source: source.into(),
            skill_id: skill_id.into(),
            name: skill_id.to_uppercase(),
            installs,
        }
    }

    #[test]
    fn test_filter_and_rank_by_peak() {
        let skills = vec![
            skill("a", "low", 500),
            skill("a", "high", 2000),
            skill("b", "mid", 1500),
        ];
        let groups = rank_sources(skills, 1000, 0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].source, "a");
        assert_eq!(groups[0].peak_installs, 2000);
        // The 500-install skill was filtered before grouping.
        assert_eq!(groups[0].skills.len(), 1);
        assert_eq!(groups[1].source, "b");
        assert_eq!(groups[1].peak_installs, 1500);
    }

    #[test]
    fn test_equal_peaks_keep_first_encounter_order() {
        let skills = vec![
            skill("first", "x", 1500),
            skill("second", "y", 1500),
            skill("third", "z", 1500),
        ];
        let groups = rank_sources(skills, 1000, 0);
        let order: Vec<&str> = groups.iter().map(|g| g.source.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_max_sources_truncates_after_ranking() {
        let skills = vec![
            skill("a", "x", 2000),
            skill("b", "y", 1500),
            skill("c", "z", 3000),
        ];
        let groups = rank_sources(skills, 1000, 1);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source, "c");
    }

    #[test]
    fn test_zero_max_sources_means_unlimited() {
        let skills = vec![skill("a", "x", 2000), skill("b", "y", 1500)];
        assert_eq!(rank_sources(skills, 1000, 0).len(), 2);
    }

    #[test]
    fn test_render_slug_and_url() {
        let groups = rank_sources(vec![skill("octo/cat", "x", 2000)], 1000, 0);
        assert_eq!(render_slug(&groups), "octo/cat\n");
        assert_eq!(render_url(&groups), "https://github.com/octo/cat\n");
    }

    #[test]
    fn test_render_json_shape_and_skill_order() {
        let skills = vec![
            skill("a", "small", 1200),
            skill("a", "big", 2000),
            skill("b", "solo", 1500),
        ];
        let groups = rank_sources(skills, 1000, 0);
        let out = render_json(&groups);
        assert!(out.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_json_eq!(
            parsed,
            json!([
                {
                    "source": "a",
                    "peak_installs": 2000,
                    "skills": [
                        {"skillId": "big", "name": "BIG", "installs": 2000},
                        {"skillId": "small", "name": "SMALL", "installs": 1200},
                    ],
                },
                {
                    "source": "b",
                    "peak_installs": 1500,
                    "skills": [
                        {"skillId": "solo", "name": "SOLO", "installs": 1500},
                    ],
                },
            ])
        );
    }

    #[test]
    fn test_render_json_empty_is_empty_array() {
        assert_eq!(render_json(&[]), "[]\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let skills = vec![skill("a", "x", 2000), skill("b", "y", 1500)];
        let groups = rank_sources(skills, 1000, 0);
        assert_eq!(render_json(&groups), render_json(&groups));
        assert_eq!(render_slug(&groups), render_slug(&groups));
    }
}
