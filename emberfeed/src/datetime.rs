use chrono::{DateTime, Locale, Utc};

/// Display strings derived from one instant.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FormattedTimestamp {
    /// Fixed-pattern rendering, day before month, `h` suffix on the time.
    pub absolute: String,

    /// Humanized distance from `now`, with a directional affix.
    pub relative: String,
}

const ABSOLUTE_PATTERN: &str = "%d de %b ás %H:%Mh";

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;

/// Render both display strings for `instant`.
///
/// Pure function of its arguments; the caller supplies the wall clock so the
/// relative string can be recomputed at render time.
pub fn format(instant: DateTime<Utc>, now: DateTime<Utc>) -> FormattedTimestamp {
    FormattedTimestamp {
        absolute: absolute(instant),
        relative: relative(instant, now),
    }
}

/// Fixed-pattern rendering in Brazilian Portuguese conventions.
pub fn absolute(instant: DateTime<Utc>) -> String {
    instant
        .format_localized(ABSOLUTE_PATTERN, Locale::pt_BR)
        .to_string()
}

/// Humanized distance between `instant` and `now`.
///
/// Instants in the past read `há {distance}`, instants in the future read
/// `em {distance}`. A clock-skewed stored instant never fails.
pub fn relative(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let gap = now.signed_duration_since(instant).num_seconds();

    let distance = distance(gap.unsigned_abs());

    if gap < 0 {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

fn distance(seconds: u64) -> String {
    match seconds {
        s if s < 30 => "menos de um minuto".to_owned(),
        s if s < 90 => "1 minuto".to_owned(),
        s if s < 45 * MINUTE => format!("{} minutos", div_round(s, MINUTE)),
        s if s < 90 * MINUTE => "cerca de 1 hora".to_owned(),
        s if s < DAY => format!("cerca de {} horas", div_round(s, HOUR)),
        s if s < 42 * HOUR => "1 dia".to_owned(),
        s if s < MONTH => format!("{} dias", div_round(s, DAY)),
        s if s < 45 * DAY => "cerca de 1 mês".to_owned(),
        s if s < 60 * DAY => "quase 2 meses".to_owned(),
        s => {
            let months = s / MONTH;

            if months < 12 {
                return format!("{} meses", months);
            }

            let years = months / 12;

            match months % 12 {
                r if r < 3 => format!("cerca de {} {}", years, anos(years)),
                r if r < 9 => format!("mais de {} {}", years, anos(years)),
                _ => format!("quase {} anos", years + 1),
            }
        }
    }
}

fn anos(years: u64) -> &'static str {
    if years == 1 {
        "ano"
    } else {
        "anos"
    }
}

fn div_round(number: u64, divisor: u64) -> u64 {
    (number + divisor / 2) / divisor
}
