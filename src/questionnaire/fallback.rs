//! Built-in sample questions used when the service cannot be reached.

use super::model::{PillarGroup, Question};

struct SeedQuestion {
    pillar: &'static str,
    id: &'static str,
    text: &'static str,
    options: &'static [&'static str],
    recommendation: &'static str,
}

const FALLBACK_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        pillar: "Operational Excellence",
        id: "OPS1",
        text: "How do you deploy changes to your workloads?",
        options: &[
            "Manually, directly in production",
            "Scripted deployments with manual approval",
            "Automated pipelines with infrastructure as code",
        ],
        recommendation: "Use infrastructure as code and CI/CD pipelines so changes are small, \
                         frequent and reversible.",
    },
    SeedQuestion {
        pillar: "Security",
        id: "SEC1",
        text: "How do you manage access to your AWS resources?",
        options: &[
            "No, all users have admin access",
            "Some restrictions exist",
            "Access is scoped by role using IAM policies",
        ],
        recommendation: "Grant least privilege with IAM roles and policies and avoid long-lived \
                         administrator credentials.",
    },
    SeedQuestion {
        pillar: "Reliability",
        id: "REL1",
        text: "How do you back up your data?",
        options: &[
            "We do not take backups",
            "Backups are taken manually",
            "Backups are automated and restores are tested",
        ],
        recommendation: "Automate backups and regularly test restores against your recovery \
                         objectives.",
    },
    SeedQuestion {
        pillar: "Performance Efficiency",
        id: "PERF1",
        text: "How do you select compute resources for your workloads?",
        options: &[
            "We use whatever was provisioned first",
            "We size instances from occasional reviews",
            "We benchmark and right-size based on monitored load",
        ],
        recommendation: "Load test and monitor workloads, then choose instance types and \
                         services that match measured demand.",
    },
    SeedQuestion {
        pillar: "Cost Optimization",
        id: "COST1",
        text: "How do you monitor your cloud spending?",
        options: &[
            "We only look at the monthly bill",
            "Budgets exist but are rarely reviewed",
            "Cost allocation tags and budgets with alerts are in place",
        ],
        recommendation: "Tag resources for cost allocation and set AWS Budgets alerts to catch \
                         unexpected spend early.",
    },
];

/// Returns the compiled-in question set.
///
/// Covers every pillar with one sample question each, in the canonical pillar
/// order, starting with the default tab.
#[must_use]
pub fn fallback_questions() -> PillarGroup {
    PillarGroup::from_pillars(FALLBACK_QUESTIONS.iter().map(|seed| {
        let question = Question {
            id: seed.id.to_owned(),
            text: seed.text.to_owned(),
            options: seed
                .options
                .iter()
                .map(|option| (*option).to_owned())
                .collect(),
            recommendation: seed.recommendation.to_owned(),
        };
        (seed.pillar.to_owned(), vec![question])
    }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::fallback_questions;
    use crate::questionnaire::DEFAULT_PILLAR;

    #[rstest]
    fn fallback_covers_all_pillars_in_order() {
        let questions = fallback_questions();
        let names: Vec<&str> = questions.pillar_names().collect();

        assert_eq!(
            names,
            vec![
                "Operational Excellence",
                "Security",
                "Reliability",
                "Performance Efficiency",
                "Cost Optimization",
            ]
        );
        assert_eq!(questions.pillar_at(0), Some(DEFAULT_PILLAR));
    }

    #[rstest]
    fn fallback_is_a_valid_question_set() {
        assert!(fallback_questions().validate().is_ok());
    }

    #[rstest]
    fn security_sample_offers_role_scoped_access() {
        let questions = fallback_questions();
        let sec1 = questions
            .question("Security", "SEC1")
            .expect("fallback should contain SEC1");

        assert_eq!(
            sec1.options.get(2).map(String::as_str),
            Some("Access is scoped by role using IAM policies")
        );
    }
}
