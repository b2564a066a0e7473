#![no_main]

use libfuzzer_sys::fuzz_target;
use seesort_trace::Algorithm;

fuzz_target!(|data: &[u8]| {
    // first byte picks the algorithm, the rest are the values
    let Some((&selector, values)) = data.split_first() else {
        return;
    };
    let algorithm = Algorithm::ALL[selector as usize % Algorithm::ALL.len()];
    let trace = algorithm.trace(values);

    let mut expected = values.to_vec();
    expected.sort_unstable();
    let replayed = trace.replay(values).expect("trace indices stay inside the input");
    assert_eq!(replayed, expected);
});
