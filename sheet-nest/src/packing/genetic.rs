use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use thousands::Separable;

use crate::Result;
use crate::entities::{PlacedPart, SheetSize, sheets_required, utilization_pct};
use crate::packing::{GuillotinePacker, Packer, PartUnit};
use crate::util::GeneticConfig;

/// An ordering of the units to feed into the shelf packer
type Chromosome = Vec<usize>;

/// Genetic search over the order in which units are fed into the [`GuillotinePacker`].
///
/// All randomness is drawn from the generator passed to [`Packer::pack`], so a fixed seed reproduces the layout.
pub struct GeneticPacker {
    pub config: GeneticConfig,
}

impl GeneticPacker {
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }

    /// Evaluates a whole population. Evaluations are independent, so they run in parallel.
    fn evaluate_all(
        population: &[Chromosome],
        units: &[PartUnit],
        sheet: &SheetSize,
    ) -> Result<Vec<f32>> {
        population
            .par_iter()
            .map(|c| fitness(c, units, sheet))
            .collect()
    }
}

impl Packer for GeneticPacker {
    fn pack(
        &self,
        units: &[PartUnit],
        sheet: &SheetSize,
        rng: &mut impl Rng,
    ) -> Result<Vec<PlacedPart>> {
        let GeneticConfig {
            population_size,
            generations,
            mutation_rate,
            elite_count,
        } = self.config;
        let population_size = population_size.max(1);
        let elite_count = elite_count.min(population_size);
        let mutation_rate = mutation_rate.clamp(0.0, 1.0);

        let seed_order = GuillotinePacker::largest_first(units);
        if units.len() < 2 {
            return GuillotinePacker::place_sequence(units, &seed_order, sheet);
        }

        //the largest-first order is always part of the initial population
        let mut population = Vec::with_capacity(population_size);
        population.push(seed_order);
        while population.len() < population_size {
            let mut c = (0..units.len()).collect::<Chromosome>();
            c.shuffle(rng);
            population.push(c);
        }
        let mut fitnesses = GeneticPacker::evaluate_all(&population, units, sheet)?;
        let mut n_evals = population.len();

        let (mut best, mut best_fitness) = fittest(&population, &fitnesses);

        for generation in 0..generations {
            let mut next = fittest_indices(&fitnesses)
                .take(elite_count)
                .map(|i| population[i].clone())
                .collect::<Vec<_>>();

            while next.len() < population_size {
                let parent_a = &population[tournament(&fitnesses, rng)];
                let parent_b = &population[tournament(&fitnesses, rng)];
                let mut child = order_crossover(parent_a, parent_b, rng);
                if rng.random_bool(mutation_rate) {
                    swap_mutation(&mut child, rng);
                }
                next.push(child);
            }

            population = next;
            fitnesses = GeneticPacker::evaluate_all(&population, units, sheet)?;
            n_evals += population.len();

            let (gen_best, gen_best_fitness) = fittest(&population, &fitnesses);
            if gen_best_fitness > best_fitness {
                best = gen_best;
                best_fitness = gen_best_fitness;
                debug!("[GA] generation {generation}: improved utilization to {best_fitness:.3}%");
            }
        }

        info!(
            "[GA] {} generations finished ({} evaluations), best utilization {:.3}%",
            generations,
            n_evals.separate_with_commas(),
            best_fitness
        );

        GuillotinePacker::place_sequence(units, &best, sheet)
    }
}

/// Utilization (in percent) reached by the shelf packer with this order
fn fitness(chromosome: &Chromosome, units: &[PartUnit], sheet: &SheetSize) -> Result<f32> {
    let layout = GuillotinePacker::place_sequence(units, chromosome, sheet)?;
    let placed_area = layout.iter().map(|pp| pp.area()).sum::<f32>();
    let consumed_area = sheets_required(&layout) as f32 * sheet.area();
    Ok(utilization_pct(placed_area, consumed_area))
}

/// Population indices ordered from fittest to least fit, earlier individuals first on ties
fn fittest_indices(fitnesses: &[f32]) -> impl Iterator<Item = usize> {
    (0..fitnesses.len()).sorted_by_key(|&i| Reverse(OrderedFloat(fitnesses[i])))
}

fn fittest(population: &[Chromosome], fitnesses: &[f32]) -> (Chromosome, f32) {
    let i = fittest_indices(fitnesses)
        .next()
        .expect("population is not empty");
    (population[i].clone(), fitnesses[i])
}

/// Binary tournament: two uniformly drawn individuals, the fitter one wins (the first on ties).
fn tournament(fitnesses: &[f32], rng: &mut impl Rng) -> usize {
    let a = rng.random_range(0..fitnesses.len());
    let b = rng.random_range(0..fitnesses.len());
    match fitnesses[b] > fitnesses[a] {
        true => b,
        false => a,
    }
}

/// Copies a random-length prefix of `a`, then appends the missing genes in the order they appear in `b`.
fn order_crossover(a: &Chromosome, b: &Chromosome, rng: &mut impl Rng) -> Chromosome {
    let cut = rng.random_range(0..=a.len());
    let mut present = vec![false; a.len()];
    let mut child = Vec::with_capacity(a.len());
    for &gene in &a[..cut] {
        present[gene] = true;
        child.push(gene);
    }
    for &gene in b {
        if !present[gene] {
            present[gene] = true;
            child.push(gene);
        }
    }
    child
}

fn swap_mutation(chromosome: &mut Chromosome, rng: &mut impl Rng) {
    let i = rng.random_range(0..chromosome.len());
    let j = rng.random_range(0..chromosome.len());
    chromosome.swap(i, j);
}
