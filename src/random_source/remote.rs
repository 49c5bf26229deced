use super::NumberSource;
use crate::constants::{MAX_OUTCOME, REMOTE_BATCH_PAUSE_MS, REMOTE_BATCH_SIZE};
use crate::error::{Result, SimError};
use crate::wheel::{to_outcome, Outcome};
use std::time::Duration;

const RANDOM_ORG_URL: &str = "https://www.random.org/integers/";
const USER_AGENT: &str = "partage-random-source";

/// True random numbers from random.org's plain-text integer endpoint.
pub struct RandomOrgSource {
    batch_size: usize,
    pause: Duration,
    timeout: Duration,
}

impl Default for RandomOrgSource {
    fn default() -> Self {
        Self {
            batch_size: REMOTE_BATCH_SIZE,
            pause: Duration::from_millis(REMOTE_BATCH_PAUSE_MS),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RandomOrgSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> String {
        format!(
            "{}?num={}&min=0&max={}&col=10&base=10&format=plain&rnd=new",
            RANDOM_ORG_URL, self.batch_size, MAX_OUTCOME
        )
    }
}

impl NumberSource for RandomOrgSource {
    fn name(&self) -> &str {
        "random.org"
    }

    fn next_batch(&mut self) -> Result<Vec<Outcome>> {
        let body = ureq::get(&self.url())
            .set("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .call()
            .map_err(|e| SimError::Source(e.to_string()))?
            .into_string()?;

        let numbers = parse_plain_integers(&body)?;
        if numbers.is_empty() {
            return Err(SimError::Malformed("empty response body".to_string()));
        }
        Ok(numbers)
    }

    fn pause(&self) -> Duration {
        self.pause
    }
}

/// Parse whitespace-separated integers, rejecting anything off the wheel.
pub fn parse_plain_integers(body: &str) -> Result<Vec<Outcome>> {
    body.split_whitespace()
        .map(|token| {
            let n: i64 = token
                .parse()
                .map_err(|_| SimError::Malformed(format!("not an integer: {:?}", token)))?;
            to_outcome(n).map_err(|_| SimError::Malformed(format!("value {} outside 0-36", n)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_requests_full_wheel() {
        let url = RandomOrgSource::new().url();
        assert_eq!(
            url,
            "https://www.random.org/integers/?num=8000&min=0&max=36&col=10&base=10&format=plain&rnd=new"
        );
    }

    #[test]
    fn test_parse_columns_and_lines() {
        let body = "1\t2\t36\n0\t17\n";
        assert_eq!(parse_plain_integers(body).unwrap(), vec![1, 2, 36, 0, 17]);
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            parse_plain_integers("1 2 x"),
            Err(SimError::Malformed(_))
        ));
        assert!(matches!(
            parse_plain_integers("1 37"),
            Err(SimError::Malformed(_))
        ));
        assert!(matches!(
            parse_plain_integers("-1"),
            Err(SimError::Malformed(_))
        ));
    }

    #[test]
    fn test_remote_pauses_between_batches() {
        assert_eq!(RandomOrgSource::new().pause(), Duration::from_secs(2));
    }
}
