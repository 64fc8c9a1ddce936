//! Network-shaped field types: `ipv4` and `email`.

use rand::Rng;

use crate::error::Result;
use crate::registry::{Config, GenContext, Registry, Value};
use crate::types::{pick, random_letters};

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("ipv4", ipv4_field);
    registry.register_generator("email", email_field);
}

/// Octets are drawn from [0, 255): the upper bound is exclusive, so
/// 255 never appears.
fn ipv4_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let mut octets = [0u8; 4];
    for octet in &mut octets {
        *octet = ctx.rng.gen_range(0..255);
    }
    Ok(Value::Str(format!(
        "{}.{}.{}.{}",
        octets[0], octets[1], octets[2], octets[3]
    )))
}

const TLDS: &[&str] = &[
    "com", "net", "org", "io", "co", "dev", "app", "edu", "gov", "info", "biz", "us", "uk", "de",
    "fr", "nl", "se", "no", "jp", "au", "ca", "ch", "it", "es",
];

fn email_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let name_len = ctx.rng.gen_range(3..10);
    let domain_len = ctx.rng.gen_range(3..15);
    let name = random_letters(&mut ctx.rng, name_len);
    let domain = random_letters(&mut ctx.rng, domain_len);
    let tld = pick(&mut ctx.rng, TLDS);
    Ok(Value::Str(format!("{name}@{domain}.{tld}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_octets_never_reach_255() {
        let mut ctx = GenContext::with_seed(42);
        for _ in 0..500 {
            let value = ipv4_field(&mut ctx, &Config::Raw(None)).unwrap().to_string();
            let octets: Vec<u8> = value
                .split('.')
                .map(|o| o.parse::<u8>().unwrap())
                .collect();
            assert_eq!(octets.len(), 4);
            assert!(octets.iter().all(|&o| o < 255));
        }
    }

    #[test]
    fn test_email_shape() {
        let mut ctx = GenContext::with_seed(42);
        for _ in 0..100 {
            let value = email_field(&mut ctx, &Config::Raw(None)).unwrap().to_string();
            let (name, rest) = value.split_once('@').unwrap();
            let (domain, tld) = rest.rsplit_once('.').unwrap();
            assert!((3..=9).contains(&name.len()));
            assert!((3..=14).contains(&domain.len()));
            assert!(TLDS.contains(&tld));
        }
    }
}
