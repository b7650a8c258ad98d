use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rusty_lif::config::NetworkConfig;
use rusty_lif::network::input::{ConstantInput, RandomInput};
use rusty_lif::network::neuron::{Arithmetic, Dynamics, Neuron, NeuronState};
use rusty_lif::network::synapse::Synapse;
use rusty_lif::network::{Network, UpdateMode};
use rusty_lif::REFRACTORY_PERIOD;

#[test]
fn test_single_neuron_cycle() {
    let neurons = vec![Neuron::new(50, 10, 1, vec![])];
    let mut network = Network::from_neurons(neurons, Dynamics::default()).unwrap();
    let mut input = ConstantInput(2);

    for t in 1..50 {
        assert_eq!(network.tick(&mut input), 0);
        assert_eq!(network.neuron_ref(0).unwrap().potential(), t);
    }

    assert_eq!(network.tick(&mut input), 1);
    let neuron = network.neuron_ref(0).unwrap();
    assert!(neuron.is_firing());
    assert_eq!(neuron.potential(), 10);
    assert_eq!(neuron.refractory_timer(), REFRACTORY_PERIOD);

    for _ in 0..REFRACTORY_PERIOD {
        assert_eq!(network.tick(&mut input), 0);
        assert_eq!(network.neuron_ref(0).unwrap().potential(), 10);
    }
    assert_eq!(network.neuron_ref(0).unwrap().state(), NeuronState::Integrating);

    network.tick(&mut input);
    assert_eq!(network.neuron_ref(0).unwrap().potential(), 11);
}

#[test]
fn test_refractory_under_maximal_input() {
    let neurons = vec![Neuron::new(50, 10, 1, vec![])];
    let mut network = Network::from_neurons(neurons, Dynamics::default()).unwrap();
    let mut input = ConstantInput(u16::MAX);

    let spike_ticks: Vec<u64> = (0..200)
        .filter_map(|_| match network.tick(&mut input) {
            0 => None,
            _ => Some(network.ticks()),
        })
        .collect();

    assert_eq!(spike_ticks.first(), Some(&1));
    assert!(spike_ticks
        .windows(2)
        .all(|w| w[1] - w[0] == REFRACTORY_PERIOD as u64 + 1));
}

#[test]
fn test_firing_effect() {
    let mut neurons = vec![
        Neuron::new(1000, 0, 1, vec![]),
        Neuron::new(1000, 0, 1, vec![]),
        Neuron::new(10, 3, 1, vec![Synapse::new(0, 7), Synapse::new(1, 11), Synapse::new(0, 5)]),
    ];
    neurons[0].set_potential(100);
    neurons[1].set_potential(200);
    neurons[2].set_potential(50);
    let mut network = Network::from_neurons(neurons, Dynamics::default()).unwrap();

    assert_eq!(network.tick(&mut ConstantInput(0)), 1);
    assert_eq!(network.firing_ids(), vec![2]);
    assert_eq!(network.neuron_ref(2).unwrap().potential(), 3);
    assert_eq!(network.neuron_ref(0).unwrap().potential(), 99 + 7 + 5);
    assert_eq!(network.neuron_ref(1).unwrap().potential(), 199 + 11);
}

#[test]
fn test_decay_underflow_policy() {
    let saturating = Network::from_neurons(vec![Neuron::new(100, 7, 3, vec![])], Dynamics::default());
    let mut saturating = saturating.unwrap();
    assert_eq!(saturating.tick(&mut ConstantInput(0)), 0);
    assert_eq!(saturating.neuron_ref(0).unwrap().potential(), 0);

    let dynamics = Dynamics {
        arithmetic: Arithmetic::Wrapping,
        ..Dynamics::default()
    };
    let mut wrapping = Network::from_neurons(vec![Neuron::new(100, 7, 3, vec![])], dynamics).unwrap();
    assert_eq!(wrapping.tick(&mut ConstantInput(0)), 1);
    assert_eq!(wrapping.neuron_ref(0).unwrap().potential(), 7);
}

#[test]
fn test_determinism() {
    for mode in [UpdateMode::Cascade, UpdateMode::TwoPhase] {
        let config = NetworkConfig {
            update_mode: mode,
            ..NetworkConfig::default()
        };

        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut network = Network::build(&config, &mut rng).unwrap();
            let mut input = RandomInput::new(rng, config.max_input);
            let num_spikes = network.run(500, &mut input);
            (network, num_spikes)
        };

        let (network_1, num_spikes_1) = run(42);
        let (network_2, num_spikes_2) = run(42);
        assert_eq!(num_spikes_1, num_spikes_2);
        assert_eq!(network_1, network_2);
        assert_eq!(network_1.snapshot(), network_2.snapshot());

        let (network_3, _) = run(43);
        assert_ne!(network_1, network_3);
    }
}

#[test]
fn test_network_activity() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut network = Network::initialize(192, 16, 12, &mut rng).unwrap();
    let mut input = RandomInput::with_default_range(rng);
    assert!(network.run(5000, &mut input) > 0);
    assert_eq!(network.ticks(), 5000);
}

#[test]
fn test_synapse_targets_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..20 {
        let width = rng.gen_range(1..20);
        let height = rng.gen_range(1..20);
        let network = Network::initialize(width * height, width, height, &mut rng).unwrap();
        assert!(network
            .neurons_iter()
            .flat_map(|neuron| neuron.synapses())
            .all(|synapse| synapse.target() < network.num_neurons()));
        for id in 0..network.num_neurons() {
            let num_synapses = network.neuron_ref(id).unwrap().synapses().len();
            for k in 0..num_synapses {
                assert!(network.synapse_target(id, k).is_ok());
            }
        }
    }
}

#[test]
fn test_invalid_grid_is_config_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let err = Network::initialize(100, 9, 11, &mut rng).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.json");

    let config = NetworkConfig {
        arithmetic: Arithmetic::Wrapping,
        update_mode: UpdateMode::TwoPhase,
        lim_weights: (5, 9),
        ..NetworkConfig::with_grid(8, 4)
    };
    config.save_to(&path).unwrap();
    assert_eq!(NetworkConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_file_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.json");
    std::fs::write(&path, r#"{"num_neurons": 10, "grid_width": 3, "grid_height": 3}"#).unwrap();
    assert!(NetworkConfig::load_from(&path).unwrap_err().is_config_error());

    std::fs::write(&path, "not json").unwrap();
    assert!(!NetworkConfig::load_from(&path).unwrap_err().is_config_error());
    assert!(NetworkConfig::load_from(dir.path().join("missing.json")).is_err());
}
