use crate::algorithms::gas::PrototypeStore;
use crate::utils::Float;

/// Returns a dataset of ten points grouped around four regions.
pub fn get_clustered_dataset() -> Vec<Vec<Float>> {
    vec![
        vec![0.9, 0.1, 0.1],
        vec![0.8, 0.2, 0.2],
        vec![0.1, 0.9, 0.1],
        vec![0.2, 0.8, 0.2],
        vec![0.5, 0.5, 0.5],
        vec![0.6, 0.6, 0.6],
        vec![0.1, 0.1, 0.9],
        vec![0.2, 0.2, 0.8],
        vec![0.15, 0.85, 0.1],
        vec![0.85, 0.15, 0.1],
    ]
}

/// Returns means of the regions in the clustered dataset.
pub fn get_cluster_means() -> Vec<Vec<Float>> {
    let dataset = get_clustered_dataset();
    let clusters: [&[usize]; 4] = [&[0, 1, 9], &[2, 3, 8], &[4, 5], &[6, 7]];

    clusters
        .iter()
        .map(|indices| {
            (0..3)
                .map(|dim| indices.iter().map(|&idx| dataset[idx][dim]).sum::<Float>() / indices.len() as Float)
                .collect()
        })
        .collect()
}

/// Returns the mean of the whole dataset.
pub fn get_dataset_mean(dataset: &[Vec<Float>]) -> Vec<Float> {
    let dimension = dataset[0].len();

    (0..dimension).map(|dim| dataset.iter().map(|data| data[dim]).sum::<Float>() / dataset.len() as Float).collect()
}

/// Returns euclidean distance, the one which is not squared.
pub fn euclidean(a: &[Float], b: &[Float]) -> Float {
    a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum::<Float>().sqrt()
}

pub fn create_test_store(weights: &[&[Float]]) -> PrototypeStore {
    PrototypeStore::from_weights(weights.iter().map(|weights| weights.to_vec()).collect()).unwrap()
}
