//! Report rendering.

use std::fmt::Write;

use anyhow::Result;
use console::style;

use planner_core::{RollProfile, Stat, StatBlock};

use crate::plan::BuildPlan;

/// Pretty-printed JSON of the whole plan.
pub fn render_json(plan: &BuildPlan<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Styled text report.
pub fn render_text(plan: &BuildPlan<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        style(format!(
            "=== {} · level {} · {} / {} ===",
            plan.class.name, plan.level, plan.playstyle, plan.priority
        ))
        .bold()
        .green()
    );
    out.push('\n');

    let _ = writeln!(out, "{}", style("Stats:").bold().yellow());
    write_stat_table(&mut out, &plan.class.stats, &plan.stats);
    out.push('\n');

    let _ = writeln!(out, "{}", style("Roll:").bold().yellow());
    write_roll(&mut out, &plan.roll);
    out.push('\n');

    let _ = writeln!(out, "{}", style("Weapons:").bold().yellow());
    for rec in &plan.weapons {
        let weapon = rec.item;
        let reqs = &weapon.requirements;
        let _ = writeln!(
            out,
            "  {} {} ({}, {}) STR {} DEX {} INT {} FTH {}",
            requirement_mark(rec.meets_requirements),
            weapon.name,
            weapon.weapon_type,
            weapon.scaling,
            reqs.strength,
            reqs.dexterity,
            reqs.intelligence,
            reqs.faith
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", style("Spells:").bold().yellow());
    if !plan.uses_magic {
        let _ = writeln!(out, "  This build does not use magic.");
    } else if plan.spells.is_empty() {
        let _ = writeln!(out, "  No spells in the catalog for this school.");
    }
    for rec in &plan.spells {
        let spell = rec.item;
        let _ = writeln!(
            out,
            "  {} {} ({}, {}) INT {} FTH {}",
            requirement_mark(rec.meets_requirements),
            spell.name,
            spell.school,
            spell.spell_type,
            spell.requirements.intelligence,
            spell.requirements.faith
        );
    }

    out
}

fn write_stat_table(out: &mut String, starting: &StatBlock, stats: &StatBlock) {
    for stat in Stat::all() {
        let before = starting.get(stat);
        let after = stats.get(stat);
        let gained = after.saturating_sub(before);
        let delta = if gained > 0 {
            style(format!("+{gained}")).cyan().to_string()
        } else {
            String::new()
        };
        let _ = writeln!(out, "  {:<13} {:>3} → {:>3} {}", stat.to_string(), before, after, delta);
    }
    let _ = writeln!(
        out,
        "  {:<13} {:>3} → {:>3}",
        "total",
        starting.sum(),
        stats.sum()
    );
}

fn write_roll(out: &mut String, roll: &RollProfile) {
    let _ = writeln!(out, "  Agility  {}", roll.agility);
    let _ = writeln!(out, "  I-frames {}", roll.i_frames);
    if roll.is_good_roll() {
        let _ = writeln!(out, "  {}", style("Good roll invincibility").green());
    } else {
        let _ = writeln!(
            out,
            "  {}",
            style(format!(
                "Below {} i-frames; raise adaptability or attunement for a better roll",
                RollProfile::GOOD_ROLL_I_FRAMES
            ))
            .dim()
        );
    }
}

fn requirement_mark(met: bool) -> console::StyledObject<&'static str> {
    if met {
        style("✓").green()
    } else {
        style("✗").red()
    }
}
