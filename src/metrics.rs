use std::collections::HashMap;

use crate::types::{MetricLabels, MetricValue};

#[macro_export]
macro_rules! add_metric {
    ($metric:ident, $amount:expr) => {{
        $crate::memory::UNSTABLE_METRICS.with(|m| m.borrow_mut().$metric += $amount);
    }};
}

#[macro_export]
macro_rules! add_metric_entry {
    ($metric:ident, $key:expr, $amount:expr) => {{
        $crate::memory::UNSTABLE_METRICS.with(|m| {
            let amount = $amount;
            if amount != 0 {
                m.borrow_mut()
                    .$metric
                    .entry($key)
                    .and_modify(|counter| *counter += amount)
                    .or_insert(amount);
            }
        });
    }};
}

trait EncoderExtensions {
    fn counter_entries<K: MetricLabels, V: MetricValue>(
        &mut self,
        name: &str,
        map: &HashMap<K, V>,
        help: &str,
    );
}

impl EncoderExtensions for ic_metrics_encoder::MetricsEncoder<Vec<u8>> {
    fn counter_entries<K: MetricLabels, V: MetricValue>(
        &mut self,
        name: &str,
        map: &HashMap<K, V>,
        help: &str,
    ) {
        map.iter().for_each(|(k, v)| {
            self.counter_vec(name, help)
                .and_then(|m| {
                    m.value(&k.metric_labels(), v.metric_value())?;
                    Ok(())
                })
                .unwrap_or(());
        })
    }
}

pub fn encode_metrics(w: &mut ic_metrics_encoder::MetricsEncoder<Vec<u8>>) -> std::io::Result<()> {
    crate::memory::UNSTABLE_METRICS.with(|m| {
        let m = m.borrow();

        w.encode_counter(
            "fee_history_requests",
            m.requests.metric_value(),
            "Number of fee history requests",
        )?;
        w.encode_counter(
            "fee_history_blocks_served",
            m.blocks_served.metric_value(),
            "Number of blocks reported in successful fee history responses",
        )?;
        w.counter_entries(
            "fee_history_errors",
            &m.errors,
            "Number of failed fee history requests",
        );

        Ok(())
    })
}
