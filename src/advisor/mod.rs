//! Scripted carbon-management advisor.
//!
//! An ordered list of (keywords, fixed reply) pairs. The first rule with any
//! keyword appearing in the question wins; otherwise the default reply is
//! returned. Matching is case-insensitive substring. This is a lookup table,
//! not inference, and it answers synchronously.

struct ReplyRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const REDUCTION_REPLY: &str = "\
Emission reduction strategies for your profile:

Manufacturing:
  - Switch to renewable energy sources (30-40% reduction potential)
  - Install energy-efficient equipment and LED lighting
  - Shift production schedules off peak energy hours

Transportation:
  - Transition the fleet to electric or hybrid vehicles
  - Optimize delivery routes
  - Encourage carpooling and remote work

Immediate actions:
  - Run an energy audit to find wastage
  - Set up carbon monitoring
  - Train employees on sustainability practices";

const PURCHASE_REPLY: &str = "\
Carbon credit purchase strategy:

  - Spread purchases over two or three tranches instead of buying in bulk;
    staggered buying typically beats a single purchase on price.
  - Prefer projects with the highest verification rating first, then fill
    the remainder from lower-priced projects.
  - Revisit your requirement after each calculation; credits needed track
    your latest emission total one-to-one.";

const ROADMAP_REPLY: &str = "\
Carbon neutrality roadmap:

Phase 1 (0-6 months): baseline carbon audit, quick efficiency wins,
  cover the current deficit with credits.
Phase 2 (6-12 months): renewable energy installation, partial fleet
  transition, green supply chain requirements.
Phase 3 (12-18 months): process improvements, employee programs, final
  offset purchase for the remainder.";

const DEFAULT_REPLY: &str = "\
Areas I can help with:

  - Emission reduction strategies (efficiency, renewables, process)
  - Carbon credit management (timing, project selection, cost-benefit)
  - Compliance and reporting (standards, targets, audit preparation)
  - Strategic planning (neutrality roadmaps, investment prioritization)

Ask a specific question about any of these areas.";

const RULES: &[ReplyRule] = &[
    ReplyRule {
        keywords: &["reduce", "emission"],
        reply: REDUCTION_REPLY,
    },
    ReplyRule {
        keywords: &["credit", "buy"],
        reply: PURCHASE_REPLY,
    },
    ReplyRule {
        keywords: &["target", "neutral"],
        reply: ROADMAP_REPLY,
    },
];

/// Pick the reply for a question. First matching rule wins.
pub fn reply_for(question: &str) -> &'static str {
    let question = question.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|k| question.contains(k)) {
            return rule.reply;
        }
    }
    DEFAULT_REPLY
}
